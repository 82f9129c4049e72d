use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Adjacency structure keyed by source node display name.
///
/// Insertion order is preserved so the patched export serializes its keys in
/// the same order the input file had them.
pub type ConnectionMap = IndexMap<String, NodePorts>;

/// Outgoing edges of a single node, grouped by port kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePorts {
  /// `main` data ports: outer index is the output port, inner list the
  /// fan-out targets of that port.
  #[serde(default)]
  pub main: Vec<Vec<ConnectionTarget>>,
  /// Non-`main` port groups (`ai_tool`, `ai_memory`, ...), carried through.
  #[serde(flatten)]
  pub rest: IndexMap<String, serde_json::Value>,
}

/// One outgoing edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTarget {
  /// Target node display name.
  pub node: String,
  /// Port kind on the receiving side.
  #[serde(rename = "type")]
  pub port_type: String,
  /// Port index on the receiving side.
  pub index: u32,
}

impl NodePorts {
  /// A single `main` edge into `target`, port 0 to port 0.
  pub fn single(target: impl Into<String>) -> Self {
    Self {
      main: vec![vec![ConnectionTarget {
        node: target.into(),
        port_type: "main".to_string(),
        index: 0,
      }]],
      rest: IndexMap::new(),
    }
  }

  /// One `main` port with no targets, the shape n8n uses for a terminal
  /// node.
  pub fn terminal() -> Self {
    Self {
      main: vec![vec![]],
      rest: IndexMap::new(),
    }
  }
}
