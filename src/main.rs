use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use flowgraft_patch::{UPSTREAM_NODE, apply};

/// Flowgraft - grafts the website-sync step onto the n8n workflow export
///
/// Reads the workflow export from its fixed location, appends the
/// "Sync Data to Website" execute-command node, rewires the tail of the
/// graph, and writes the patched export next to it. The edit is fixed; the
/// tool takes no operands.
#[derive(Parser)]
#[command(name = "flowgraft")]
#[command(version, about, long_about = None)]
struct Cli {}

const INPUT_PATH: &str = "/home/segfaultslayers/Downloads/hackathon/n8n_workflow_with_cache.json";
const OUTPUT_PATH: &str = "/home/segfaultslayers/HACKATHON/n8n_workflow_UPDATED.json";

fn main() -> Result<()> {
  let _cli = Cli::parse();

  // Structured events go to stderr; stdout is reserved for the progress
  // report and the import checklist.
  tracing_subscriber::fmt().with_writer(std::io::stderr).init();

  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(run())
}

async fn run() -> Result<()> {
  println!("Reading workflow from {INPUT_PATH}");
  let report = apply(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH))
    .await
    .context("failed to update workflow")?;

  println!("Loaded workflow with {} nodes", report.nodes_before);
  println!(
    "Added '{}' node ({} nodes total)",
    report.added_node, report.nodes_after
  );
  println!("Rewired '{UPSTREAM_NODE}' to feed '{}'", report.added_node);
  println!("Updated workflow saved to: {OUTPUT_PATH}");
  println!();
  println!("Next steps:");
  println!("1. Import this workflow into n8n (http://localhost:5678)");
  println!("2. Replace the existing workflow");
  println!("3. Run the workflow to test automatic sync");
  println!("4. Check the website to see automatic updates!");

  Ok(())
}
