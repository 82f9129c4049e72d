use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::connection::ConnectionMap;
use crate::node::NodeDef;

/// A full n8n workflow export.
///
/// Only `nodes` and `connections` are structured; the rest of the export
/// (`name`, `active`, `settings`, `pinData`, `meta`, ...) rides along in
/// `rest` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDoc {
  pub nodes: Vec<NodeDef>,
  pub connections: ConnectionMap,
  #[serde(flatten)]
  pub rest: IndexMap<String, serde_json::Value>,
}
