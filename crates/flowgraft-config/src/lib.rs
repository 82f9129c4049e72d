//! Flowgraft Config
//!
//! This crate contains the serializable types for an n8n workflow export:
//! the node list plus the connection map that wires nodes together.
//!
//! The types are deliberately loose. Only the fields this tool reads or
//! writes are named, and everything else in the document is carried through
//! a flattened passthrough map so a patched export still imports cleanly.
//! No semantic validation happens here (or anywhere); the graph is taken
//! at face value.

mod connection;
mod document;
mod node;

pub use connection::{ConnectionMap, ConnectionTarget, NodePorts};
pub use document::WorkflowDoc;
pub use node::NodeDef;
