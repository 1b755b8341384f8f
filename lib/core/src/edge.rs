use crate::node::Node;
use std::fmt;

/// Weight carried by every edge of an unweighted graph.
pub const DEFAULT_WEIGHT: i64 = 1;

/// A connection between two nodes.
///
/// Identity is the full `(source, destination, weight)` triple, so two edges
/// between the same pair with different weights are distinct. Ordering sorts
/// by source, then destination, then weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub source: Node,
    pub destination: Node,
    pub weight: i64,
}

impl Edge {
    #[inline]
    #[must_use]
    pub fn new(source: Node, destination: Node, weight: i64) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// The same edge walked the other way round.
    #[inline]
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
            weight: self.weight,
        }
    }

    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    #[inline]
    pub fn touches(&self, name: &str) -> bool {
        self.source.name == name || self.destination.name == name
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (weight: {})",
            self.source, self.destination, self.weight
        )
    }
}
