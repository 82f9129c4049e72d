use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One vertex of the workflow graph.
///
/// Field order here fixes the key order of serialized nodes. Positions and
/// `typeVersion` are kept as raw JSON numbers so integer coordinates do not
/// come back as floats after the round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDef {
  /// Execution parameters, opaque to this tool.
  #[serde(default)]
  pub parameters: IndexMap<String, serde_json::Value>,
  /// Node type tag, e.g. "n8n-nodes-base.executeCommand".
  #[serde(rename = "type")]
  pub node_type: String,
  #[serde(rename = "typeVersion")]
  pub type_version: Number,
  /// Canvas position, x then y.
  pub position: [Number; 2],
  pub id: String,
  /// Display name; doubles as this node's key in the connection map.
  pub name: String,
  #[serde(rename = "alwaysOutputData", skip_serializing_if = "Option::is_none")]
  pub always_output_data: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
  /// Remaining n8n node fields (`credentials`, `disabled`, `webhookId`, ...).
  #[serde(flatten)]
  pub rest: IndexMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_renamed_fields_round_trip() {
    let node: NodeDef = serde_json::from_str(
      r#"{
        "parameters": {},
        "type": "n8n-nodes-base.executeCommand",
        "typeVersion": 1,
        "position": [712, 32],
        "id": "abc",
        "name": "Run Command",
        "alwaysOutputData": true
      }"#,
    )
    .expect("node should parse");

    assert_eq!(node.node_type, "n8n-nodes-base.executeCommand");
    assert_eq!(node.always_output_data, Some(true));

    let out = serde_json::to_string(&node).expect("node should serialize");
    assert!(out.contains(r#""type":"n8n-nodes-base.executeCommand""#));
    assert!(out.contains(r#""typeVersion":1"#));
    assert!(out.contains(r#""alwaysOutputData":true"#));
    assert!(!out.contains("notes"), "absent notes should stay absent: {}", out);
  }
}
