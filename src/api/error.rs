use std::path::PathBuf;

use thiserror::Error;

/// Failures of a round-trip to the processing backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to read upload {}: {source}", .path.display())]
    ReadUpload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("worker thread exited before reporting a result")]
    WorkerGone,
}
