//! The linear read → mutate → write pipeline.

use std::path::Path;

use flowgraft_config::WorkflowDoc;
use tracing::{info, instrument};

use crate::error::PatchError;
use crate::ops::{append_node, mark_terminal, rewire_main, sync_node};

/// Display name of the node whose outgoing edge is redirected at the new
/// node. Must already exist in the input for this to be a rewire; a missing
/// entry is silently created instead.
pub const UPSTREAM_NODE: &str = "Write Website JSON";

/// What [`apply`] did, for the caller's progress report.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchReport {
  /// Node count of the input document.
  pub nodes_before: usize,
  /// Node count of the written document.
  pub nodes_after: usize,
  /// Display name of the appended node.
  pub added_node: String,
}

/// Load the workflow at `input`, graft the sync node onto it, and write the
/// patched document to `output`, pretty-printed with 2-space indentation.
///
/// The input file is never modified, and nothing is written when an earlier
/// step fails. `output` is overwritten unconditionally when one exists.
#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub async fn apply(input: &Path, output: &Path) -> Result<PatchReport, PatchError> {
  let raw = tokio::fs::read_to_string(input)
    .await
    .map_err(|source| PatchError::Read {
      path: input.to_path_buf(),
      source,
    })?;
  let mut doc: WorkflowDoc =
    serde_json::from_str(&raw).map_err(|source| PatchError::Parse {
      path: input.to_path_buf(),
      source,
    })?;

  let nodes_before = doc.nodes.len();
  info!(nodes = nodes_before, "workflow_loaded");

  let node = sync_node();
  let added_node = node.name.clone();
  append_node(&mut doc, node);
  info!(node = %added_node, "node_appended");

  rewire_main(&mut doc, UPSTREAM_NODE, &added_node);
  mark_terminal(&mut doc, &added_node);
  info!(source = UPSTREAM_NODE, target = %added_node, "connections_rewired");

  let pretty = serde_json::to_string_pretty(&doc)?;
  tokio::fs::write(output, pretty)
    .await
    .map_err(|source| PatchError::Write {
      path: output.to_path_buf(),
      source,
    })?;
  info!("workflow_written");

  Ok(PatchReport {
    nodes_before,
    nodes_after: doc.nodes.len(),
    added_node,
  })
}
