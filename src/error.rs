// src/error.rs

use std::io;

use thiserror::Error;

/// Failure taxonomy for one watch cycle.
///
/// `Network` is caught at the fetch boundary and only aborts that source's
/// cycle. Everything else propagates and ends the run: upstream schema drift
/// and unreadable snapshots are not recoverable here.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Request failure, timeout, or non-2xx status.
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    /// Snapshot file exists but does not decode.
    #[error("snapshot {path} is not valid JSON: {source}")]
    Format {
        path: String,
        source: serde_json::Error,
    },

    /// Upstream payload missing an expected field, or ill-typed.
    #[error("unexpected payload: {0}")]
    Payload(serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
