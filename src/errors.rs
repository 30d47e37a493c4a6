use std::path::PathBuf;
use thiserror::Error;

/// Failures of the durable day-log rewrite. A mutating call that hits one of
/// these rolls its in-memory change back before surfacing the error, so the
/// resident log and the artifact on disk never disagree silently.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write day log {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize day log: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("state lock poisoned")]
    LockPoisoned,
}
