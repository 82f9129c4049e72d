//! Flowgraft Patch
//!
//! The single edit this tool exists for: append the "Sync Data to Website"
//! execute-command node to a workflow export and rewire the tail of the
//! graph so the sync step runs after "Write Website JSON".
//!
//! The edit is applied blindly: no duplicate-ID checks, no reachability or
//! cycle analysis. A source node that is missing from the connection map is
//! created rather than rewired; the two cases are indistinguishable in the
//! output.

mod error;
mod ops;
mod pipeline;

pub use error::PatchError;
pub use ops::{append_node, mark_terminal, rewire_main, sync_node};
pub use pipeline::{PatchReport, UPSTREAM_NODE, apply};
