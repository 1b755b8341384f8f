//! JSON codec for graphs and graph collections.
//!
//! A single graph is stored as
//! `{"alias", "is_directed", "is_weighted", "nodes": [{"name"}], "edges": [{"source", "destination", "weight"}]}`
//! and a collection wraps those under `{"graphs": [...]}`.

use graphlite_core::{Error, Graph, GraphDocument, Result};
use serde::Deserialize;
use serde_json::{json, Value};

/// Top-level fields every graph document must carry, in the order they are
/// checked.
pub const REQUIRED_FIELDS: [&str; 5] = ["alias", "is_directed", "is_weighted", "nodes", "edges"];

pub fn graph_to_json(graph: &Graph) -> Result<Value> {
    serde_json::to_value(graph.dump()).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decode one graph document and rebuild the graph from it.
///
/// Fails with `MalformedInput` naming the first missing required field, or
/// describing the first field of the wrong type. Replay errors (a node listed
/// twice, an edge to an unlisted node) are returned as-is.
pub fn json_to_graph(value: &Value) -> Result<Graph> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::MalformedInput("graph document is not an object".to_string()))?;

    if let Some(missing) = REQUIRED_FIELDS.iter().find(|field| !object.contains_key(**field)) {
        return Err(Error::MalformedInput(format!("{missing} not found")));
    }

    let document = GraphDocument::deserialize(value).map_err(|e| Error::MalformedInput(e.to_string()))?;
    Graph::load(document)
}

/// Wrap graphs in the `{"graphs": [...]}` envelope, ordered by alias.
pub fn collection_to_json<'a, I>(graphs: I) -> Result<Value>
where
    I: IntoIterator<Item = &'a Graph>,
{
    let mut graphs: Vec<&Graph> = graphs.into_iter().collect();
    graphs.sort_by(|a, b| a.alias().cmp(b.alias()));

    let encoded = graphs
        .into_iter()
        .map(graph_to_json)
        .collect::<Result<Vec<Value>>>()?;
    Ok(json!({ "graphs": encoded }))
}

/// Decode a whole collection. Any malformed entry fails the batch; the
/// error names the offending entry's position.
pub fn json_to_collection(value: &Value) -> Result<Vec<Graph>> {
    let entries = value
        .get("graphs")
        .ok_or_else(|| Error::MalformedInput("graphs not found".to_string()))?
        .as_array()
        .ok_or_else(|| Error::MalformedInput("graphs is not an array".to_string()))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| json_to_graph(entry).map_err(|e| e.in_context(&format!("graph #{index}"))))
        .collect()
}

/// What an absent or unreadable store decodes from.
#[inline]
pub fn empty_collection() -> Value {
    json!({ "graphs": [] })
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphlite_core::ErrorKind;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new("g1", true, true);
        graph.add_node("alice").unwrap();
        graph.add_node("bob").unwrap();
        graph.add_edge("alice", "bob", Some(5)).unwrap();
        graph.add_edge("alice", "bob", Some(3)).unwrap();
        graph
    }

    #[test]
    fn test_graph_to_json_shape() {
        let value = graph_to_json(&sample_graph()).unwrap();

        assert_eq!(value["alias"], "g1");
        assert_eq!(value["is_directed"], true);
        assert_eq!(value["is_weighted"], true);
        assert_eq!(value["nodes"].as_array().unwrap().len(), 2);
        assert!(value["nodes"].as_array().unwrap().contains(&json!({"name": "bob"})));
        assert!(value["edges"]
            .as_array()
            .unwrap()
            .contains(&json!({"source": "alice", "destination": "bob", "weight": 5})));
    }

    #[test]
    fn test_round_trip() {
        let graph = sample_graph();
        let restored = json_to_graph(&graph_to_json(&graph).unwrap()).unwrap();

        assert_eq!(restored.alias(), "g1");
        assert!(restored.is_directed());
        assert!(restored.is_weighted());
        assert_eq!(restored.node_names(), graph.node_names());
        assert_eq!(restored.sorted_edges(), graph.sorted_edges());
    }

    #[test]
    fn test_missing_field_is_named() {
        let mut value = graph_to_json(&sample_graph()).unwrap();
        value.as_object_mut().unwrap().remove("edges");

        match json_to_graph(&value) {
            Err(Error::MalformedInput(msg)) => assert_eq!(msg, "edges not found"),
            other => panic!("expected MalformedInput, got {:?}", other),
        }

        // The first missing field in check order wins.
        let value = json!({"nodes": [], "edges": []});
        match json_to_graph(&value) {
            Err(Error::MalformedInput(msg)) => assert_eq!(msg, "alias not found"),
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_types_are_malformed() {
        let value = json!({
            "alias": "g",
            "is_directed": "yes",
            "is_weighted": false,
            "nodes": [],
            "edges": []
        });
        assert_eq!(json_to_graph(&value).unwrap_err().kind(), ErrorKind::MalformedInput);
        assert_eq!(json_to_graph(&json!([1, 2])).unwrap_err().kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_endpoint_as_node_object() {
        let value = json!({
            "alias": "legacy",
            "is_directed": false,
            "is_weighted": false,
            "nodes": [{"name": "a"}, {"name": "b"}],
            "edges": [{"source": {"name": "a"}, "destination": "b", "weight": 1}]
        });
        let graph = json_to_graph(&value).unwrap();
        assert!(graph.has_edge("a", "b", 1));
        assert!(graph.has_edge("b", "a", 1));
    }

    #[test]
    fn test_replay_errors_abort() {
        let value = json!({
            "alias": "dup",
            "is_directed": true,
            "is_weighted": false,
            "nodes": [{"name": "a"}, {"name": "a"}],
            "edges": []
        });
        assert_eq!(json_to_graph(&value).unwrap_err().kind(), ErrorKind::AlreadyExists);

        let value = json!({
            "alias": "dangling",
            "is_directed": true,
            "is_weighted": false,
            "nodes": [{"name": "a"}],
            "edges": [{"source": "a", "destination": "ghost", "weight": 1}]
        });
        assert_eq!(json_to_graph(&value).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_collection_round_trip() {
        let mut other = Graph::new("g0", false, false);
        other.add_node("x").unwrap();
        let graphs = vec![sample_graph(), other];

        let value = collection_to_json(&graphs).unwrap();
        let aliases: Vec<&str> = value["graphs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["alias"].as_str().unwrap())
            .collect();
        assert_eq!(aliases, vec!["g0", "g1"]);

        let restored = json_to_collection(&value).unwrap();
        assert_eq!(restored.len(), 2);
        assert!(json_to_collection(&empty_collection()).unwrap().is_empty());
    }

    #[test]
    fn test_collection_fails_as_a_batch() {
        let good = graph_to_json(&sample_graph()).unwrap();
        let value = json!({"graphs": [good, {"alias": "broken"}]});

        match json_to_collection(&value) {
            Err(Error::MalformedInput(msg)) => assert_eq!(msg, "graph #1: is_directed not found"),
            other => panic!("expected MalformedInput, got {:?}", other),
        }
        assert!(json_to_collection(&json!({})).is_err());
        assert!(json_to_collection(&json!({"graphs": {}})).is_err());
    }
}
