//! Shell command parsing and syntax checks.
//!
//! Only the shape of a line is checked here (arity, identifier characters,
//! numeric weights). Whether a graph or node exists is left to the service.

use thiserror::Error;

pub const CREATE_GRAPH: &str = "CREATE GRAPH";
pub const ADD_NODE: &str = "ADD NODE";
pub const ADD_EDGE: &str = "ADD EDGE";
pub const DEL_NODE: &str = "DEL NODE";
pub const DEL_EDGE: &str = "DEL EDGE";
pub const LIST_GRAPHS: &str = "LIST GRAPHS";
pub const LIST_NODES: &str = "LIST NODES";
pub const LIST_EDGES: &str = "LIST EDGES";
pub const DESCRIBE_GRAPH: &str = "DESCRIBE GRAPH";
pub const LOAD_GRAPH: &str = "LOAD GRAPH";
pub const SAVE_GRAPH: &str = "SAVE GRAPH";
pub const HELP: &str = "HELP";
pub const CLEAR: &str = "CLEAR";
pub const EXIT: &str = "EXIT";

pub const KEYWORDS: [&str; 14] = [
    CREATE_GRAPH,
    ADD_NODE,
    ADD_EDGE,
    DEL_NODE,
    DEL_EDGE,
    LIST_GRAPHS,
    LIST_NODES,
    LIST_EDGES,
    DESCRIBE_GRAPH,
    LOAD_GRAPH,
    SAVE_GRAPH,
    HELP,
    CLEAR,
    EXIT,
];

pub const CREATE_GRAPH_USAGE: &str = "Usage: CREATE GRAPH <alias> [DIRECTED] [WEIGHTED]";
pub const ADD_NODE_USAGE: &str = "Usage: ADD NODE <graph_alias> <node_name> (alphanumeric, no spaces)";
pub const ADD_EDGE_USAGE: &str =
    "Usage: ADD EDGE <graph_alias> <node1> <node2> [weight] (alphanumeric names, integer weight)";
pub const DEL_NODE_USAGE: &str = "Usage: DEL NODE <graph_alias> <node_name> (alphanumeric, no spaces)";
pub const DEL_EDGE_USAGE: &str =
    "Usage: DEL EDGE <graph_alias> <node1> <node2> [weight] (alphanumeric names, integer weight)";
pub const LIST_NODES_USAGE: &str = "Usage: LIST NODES <graph_alias>";
pub const LIST_EDGES_USAGE: &str = "Usage: LIST EDGES <graph_alias> [node1] [node2]";
pub const DESCRIBE_GRAPH_USAGE: &str = "Usage: DESCRIBE GRAPH <graph_alias>";
pub const LOAD_GRAPH_USAGE: &str = "Usage: LOAD GRAPH <filename>";
pub const SAVE_GRAPH_USAGE: &str = "Usage: SAVE GRAPH <graph_alias> <filename>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateGraph {
        alias: String,
        directed: bool,
        weighted: bool,
    },
    AddNode {
        alias: String,
        node: String,
    },
    AddEdge {
        alias: String,
        source: String,
        destination: String,
        weight: Option<i64>,
    },
    DelNode {
        alias: String,
        node: String,
    },
    DelEdge {
        alias: String,
        source: String,
        destination: String,
        weight: Option<i64>,
    },
    ListGraphs,
    ListNodes {
        alias: String,
    },
    ListEdges {
        alias: String,
        node1: Option<String>,
        node2: Option<String>,
    },
    DescribeGraph {
        alias: String,
    },
    LoadGraph {
        filename: String,
    },
    SaveGraph {
        alias: String,
        filename: String,
    },
    Help,
    Clear,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{0}")]
    Usage(&'static str),

    #[error("Invalid input")]
    InvalidInput,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// Keywords are case-insensitive and matched longest first, so `LIST EDGES`
/// wins over a bare `LIST`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Ok(None);
    }

    let (keyword, args) = split_keyword(&parts)?;
    let command = match keyword {
        CREATE_GRAPH => parse_create_graph(args)?,
        ADD_NODE => {
            let [alias, node] = identifiers(args, ADD_NODE_USAGE)?;
            Command::AddNode { alias, node }
        }
        ADD_EDGE => {
            let (alias, source, destination, weight) = edge_args(args, ADD_EDGE_USAGE)?;
            Command::AddEdge {
                alias,
                source,
                destination,
                weight,
            }
        }
        DEL_NODE => {
            let [alias, node] = identifiers(args, DEL_NODE_USAGE)?;
            Command::DelNode { alias, node }
        }
        DEL_EDGE => {
            let (alias, source, destination, weight) = edge_args(args, DEL_EDGE_USAGE)?;
            Command::DelEdge {
                alias,
                source,
                destination,
                weight,
            }
        }
        LIST_GRAPHS => Command::ListGraphs,
        LIST_NODES => {
            let [alias] = identifiers(args, LIST_NODES_USAGE)?;
            Command::ListNodes { alias }
        }
        LIST_EDGES => parse_list_edges(args)?,
        DESCRIBE_GRAPH => {
            let [alias] = identifiers(args, DESCRIBE_GRAPH_USAGE)?;
            Command::DescribeGraph { alias }
        }
        LOAD_GRAPH => match args {
            [filename] => Command::LoadGraph {
                filename: filename.to_string(),
            },
            _ => return Err(CommandError::Usage(LOAD_GRAPH_USAGE)),
        },
        SAVE_GRAPH => match args {
            [alias, filename] => Command::SaveGraph {
                alias: identifier(alias)?,
                filename: filename.to_string(),
            },
            _ => return Err(CommandError::Usage(SAVE_GRAPH_USAGE)),
        },
        HELP => Command::Help,
        CLEAR => Command::Clear,
        EXIT => Command::Exit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn split_keyword<'a, 'b>(parts: &'b [&'a str]) -> Result<(&'static str, &'b [&'a str]), CommandError> {
    for n in (1..=parts.len().min(2)).rev() {
        let candidate = parts[..n].join(" ").to_uppercase();
        if let Some(keyword) = KEYWORDS.iter().find(|k| **k == candidate) {
            return Ok((*keyword, &parts[n..]));
        }
    }
    Err(CommandError::Unknown(parts[0].to_uppercase()))
}

fn parse_create_graph(args: &[&str]) -> Result<Command, CommandError> {
    let (alias, flags) = args
        .split_first()
        .ok_or(CommandError::Usage(CREATE_GRAPH_USAGE))?;

    let mut directed = false;
    let mut weighted = false;
    for flag in flags {
        match flag.to_uppercase().as_str() {
            "DIRECTED" => directed = true,
            "WEIGHTED" => weighted = true,
            _ => return Err(CommandError::InvalidInput),
        }
    }

    Ok(Command::CreateGraph {
        alias: identifier(alias)?,
        directed,
        weighted,
    })
}

fn parse_list_edges(args: &[&str]) -> Result<Command, CommandError> {
    if args.is_empty() || args.len() > 3 {
        return Err(CommandError::Usage(LIST_EDGES_USAGE));
    }
    let mut names = args.iter().map(|arg| identifier(arg));
    let alias = names.next().ok_or(CommandError::Usage(LIST_EDGES_USAGE))??;
    let node1 = names.next().transpose()?;
    let node2 = names.next().transpose()?;
    Ok(Command::ListEdges { alias, node1, node2 })
}

/// `<alias> <node1> <node2> [weight]`
fn edge_args(
    args: &[&str],
    usage: &'static str,
) -> Result<(String, String, String, Option<i64>), CommandError> {
    let (names, weight) = match args {
        [a, b, c] => ([*a, *b, *c], None),
        [a, b, c, w] => ([*a, *b, *c], Some(*w)),
        _ => return Err(CommandError::Usage(usage)),
    };
    let [alias, source, destination] = identifiers(&names, usage)?;
    let weight = weight.map(parse_weight).transpose()?;
    Ok((alias, source, destination, weight))
}

/// Exactly `N` identifiers.
fn identifiers<const N: usize>(args: &[&str], usage: &'static str) -> Result<[String; N], CommandError> {
    let args: &[&str; N] = args.try_into().map_err(|_| CommandError::Usage(usage))?;
    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = identifier(arg)?;
    }
    Ok(out)
}

fn identifier(arg: &str) -> Result<String, CommandError> {
    if is_identifier(arg) {
        Ok(arg.to_string())
    } else {
        Err(CommandError::InvalidInput)
    }
}

/// Non-empty and alphanumeric.
pub fn is_identifier(arg: &str) -> bool {
    !arg.is_empty() && arg.chars().all(char::is_alphanumeric)
}

/// Decimal digits with an optional leading `-`, so any weight a store file
/// can hold can also be typed.
fn parse_weight(arg: &str) -> Result<i64, CommandError> {
    let digits = arg.strip_prefix('-').unwrap_or(arg);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CommandError::InvalidInput);
    }
    arg.parse().map_err(|_| CommandError::InvalidInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(parse("   "), Ok(None));
        assert_eq!(parse(""), Ok(None));
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(parse("list graphs"), Ok(Some(Command::ListGraphs)));
        assert_eq!(parse("Help"), Ok(Some(Command::Help)));
        assert_eq!(parse("exit"), Ok(Some(Command::Exit)));
        assert_eq!(
            parse("add node g1 alice"),
            Ok(Some(Command::AddNode {
                alias: "g1".to_string(),
                node: "alice".to_string()
            }))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(parse("frobnicate g1"), Err(CommandError::Unknown("FROBNICATE".to_string())));
        assert_eq!(parse("LIST"), Err(CommandError::Unknown("LIST".to_string())));
    }

    #[test]
    fn test_create_graph_flags() {
        assert_eq!(
            parse("CREATE GRAPH g1 weighted DIRECTED"),
            Ok(Some(Command::CreateGraph {
                alias: "g1".to_string(),
                directed: true,
                weighted: true
            }))
        );
        assert_eq!(
            parse("CREATE GRAPH g2"),
            Ok(Some(Command::CreateGraph {
                alias: "g2".to_string(),
                directed: false,
                weighted: false
            }))
        );
        assert_eq!(parse("CREATE GRAPH"), Err(CommandError::Usage(CREATE_GRAPH_USAGE)));
        assert_eq!(parse("CREATE GRAPH g1 SPARSE"), Err(CommandError::InvalidInput));
        assert_eq!(parse("CREATE GRAPH g-1"), Err(CommandError::InvalidInput));
    }

    #[test]
    fn test_add_edge_weight() {
        assert_eq!(
            parse("ADD EDGE g1 alice bob 5"),
            Ok(Some(Command::AddEdge {
                alias: "g1".to_string(),
                source: "alice".to_string(),
                destination: "bob".to_string(),
                weight: Some(5)
            }))
        );
        assert_eq!(
            parse("ADD EDGE g1 alice bob"),
            Ok(Some(Command::AddEdge {
                alias: "g1".to_string(),
                source: "alice".to_string(),
                destination: "bob".to_string(),
                weight: None
            }))
        );
        assert_eq!(parse("ADD EDGE g1 alice bob five"), Err(CommandError::InvalidInput));
        assert_eq!(parse("ADD EDGE g1 alice bob +3"), Err(CommandError::InvalidInput));
        assert_eq!(parse("ADD EDGE g1 alice bob -"), Err(CommandError::InvalidInput));
        assert_eq!(parse("ADD EDGE g1 alice bob 1e3"), Err(CommandError::InvalidInput));
        assert_eq!(
            parse("ADD EDGE g1 alice bob 99999999999999999999"),
            Err(CommandError::InvalidInput)
        );
        assert_eq!(parse("ADD EDGE g1 alice"), Err(CommandError::Usage(ADD_EDGE_USAGE)));
        assert_eq!(parse("ADD EDGE g1 a b 1 2"), Err(CommandError::Usage(ADD_EDGE_USAGE)));
        assert_eq!(parse("ADD EDGE g1 al!ce bob"), Err(CommandError::InvalidInput));
    }

    #[test]
    fn test_negative_weight() {
        assert_eq!(
            parse("DEL EDGE g1 alice bob -3"),
            Ok(Some(Command::DelEdge {
                alias: "g1".to_string(),
                source: "alice".to_string(),
                destination: "bob".to_string(),
                weight: Some(-3)
            }))
        );
        assert_eq!(parse("DEL EDGE g1 alice bob --3"), Err(CommandError::InvalidInput));
    }

    #[test]
    fn test_node_arity() {
        assert_eq!(parse("ADD NODE g1"), Err(CommandError::Usage(ADD_NODE_USAGE)));
        assert_eq!(parse("DEL NODE g1 a b"), Err(CommandError::Usage(DEL_NODE_USAGE)));
        assert_eq!(parse("DEL NODE g1 a.b"), Err(CommandError::InvalidInput));
    }

    #[test]
    fn test_list_edges_optional_nodes() {
        assert_eq!(
            parse("LIST EDGES g1"),
            Ok(Some(Command::ListEdges {
                alias: "g1".to_string(),
                node1: None,
                node2: None
            }))
        );
        assert_eq!(
            parse("LIST EDGES g1 a b"),
            Ok(Some(Command::ListEdges {
                alias: "g1".to_string(),
                node1: Some("a".to_string()),
                node2: Some("b".to_string())
            }))
        );
        assert_eq!(parse("LIST EDGES"), Err(CommandError::Usage(LIST_EDGES_USAGE)));
        assert_eq!(parse("LIST EDGES g1 a b c"), Err(CommandError::Usage(LIST_EDGES_USAGE)));
    }

    #[test]
    fn test_file_commands_keep_paths() {
        assert_eq!(
            parse("LOAD GRAPH ./data/g1.json"),
            Ok(Some(Command::LoadGraph {
                filename: "./data/g1.json".to_string()
            }))
        );
        assert_eq!(
            parse("SAVE GRAPH g1 /tmp/out.json"),
            Ok(Some(Command::SaveGraph {
                alias: "g1".to_string(),
                filename: "/tmp/out.json".to_string()
            }))
        );
        assert_eq!(parse("SAVE GRAPH g1"), Err(CommandError::Usage(SAVE_GRAPH_USAGE)));
        assert_eq!(parse("LOAD GRAPH"), Err(CommandError::Usage(LOAD_GRAPH_USAGE)));
    }
}
