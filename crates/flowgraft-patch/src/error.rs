use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
  #[error("failed to read workflow file {}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("{} is not a valid workflow export", path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("failed to serialize patched workflow")]
  Serialize(#[from] serde_json::Error),

  #[error("failed to write patched workflow to {}", path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
