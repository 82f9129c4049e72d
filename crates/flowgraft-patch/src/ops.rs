//! The three graph mutations, plus the node literal they exist to install.

use flowgraft_config::{NodeDef, NodePorts, WorkflowDoc};
use indexmap::IndexMap;
use serde_json::{Number, json};

/// The hard-coded execute-command node this tool grafts onto the workflow.
pub fn sync_node() -> NodeDef {
  NodeDef {
    parameters: IndexMap::from([
      (
        "command".to_string(),
        json!("bash /home/segfaultslayers/HACKATHON/sync-data.sh"),
      ),
      ("options".to_string(), json!({})),
    ]),
    node_type: "n8n-nodes-base.executeCommand".to_string(),
    type_version: Number::from(1u32),
    position: [Number::from(712u32), Number::from(32u32)],
    id: "sync-data-to-website".to_string(),
    name: "Sync Data to Website".to_string(),
    always_output_data: Some(true),
    notes: Some(
      "Copies processed data to website public directory and creates metadata timestamp \
       for automatic updates"
        .to_string(),
    ),
    rest: IndexMap::new(),
  }
}

/// Append a node to the document's node list. No duplicate-ID check; the
/// list simply grows by one.
pub fn append_node(doc: &mut WorkflowDoc, node: NodeDef) {
  doc.nodes.push(node);
}

/// Point `source`'s outgoing `main` edge at `target`, replacing whatever was
/// there. A `source` with no existing entry is created.
pub fn rewire_main(doc: &mut WorkflowDoc, source: &str, target: &str) {
  doc.connections.insert(source.to_string(), NodePorts::single(target));
}

/// Give `name` an empty outgoing-edge list, marking it terminal.
pub fn mark_terminal(doc: &mut WorkflowDoc, name: &str) {
  doc.connections.insert(name.to_string(), NodePorts::terminal());
}

#[cfg(test)]
mod tests {
  use super::*;

  fn empty_doc() -> WorkflowDoc {
    WorkflowDoc {
      nodes: vec![],
      connections: IndexMap::new(),
      rest: IndexMap::new(),
    }
  }

  #[test]
  fn test_append_grows_list_by_one() {
    let mut doc = empty_doc();
    append_node(&mut doc, sync_node());
    append_node(&mut doc, sync_node());

    // No duplicate check; the tool trusts its input.
    assert_eq!(doc.nodes.len(), 2);
    assert_eq!(doc.nodes[1], sync_node());
  }

  #[test]
  fn test_rewire_replaces_existing_entry() {
    let mut doc = empty_doc();
    doc
      .connections
      .insert("Write Website JSON".to_string(), NodePorts::single("Old Target"));

    rewire_main(&mut doc, "Write Website JSON", "Sync Data to Website");

    let ports = &doc.connections["Write Website JSON"];
    assert_eq!(ports.main.len(), 1);
    assert_eq!(ports.main[0].len(), 1);
    assert_eq!(ports.main[0][0].node, "Sync Data to Website");
    assert_eq!(ports.main[0][0].port_type, "main");
    assert_eq!(ports.main[0][0].index, 0);
  }

  #[test]
  fn test_rewire_creates_missing_entry() {
    let mut doc = empty_doc();
    rewire_main(&mut doc, "Never Existed", "Sync Data to Website");
    assert!(doc.connections.contains_key("Never Existed"));
  }

  #[test]
  fn test_mark_terminal_leaves_no_outgoing_edges() {
    let mut doc = empty_doc();
    mark_terminal(&mut doc, "Sync Data to Website");

    let ports = &doc.connections["Sync Data to Website"];
    assert_eq!(ports.main, vec![Vec::new()]);
  }

  #[test]
  fn test_sync_node_literal() {
    let node = sync_node();
    assert_eq!(node.node_type, "n8n-nodes-base.executeCommand");
    assert_eq!(node.name, "Sync Data to Website");
    assert_eq!(node.always_output_data, Some(true));
    assert_eq!(
      node.parameters["command"],
      json!("bash /home/segfaultslayers/HACKATHON/sync-data.sh")
    );
  }
}
