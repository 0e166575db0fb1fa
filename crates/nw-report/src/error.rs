use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing report files.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
