//! Error types for hocr-grid.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for grid reconstruction operations.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("invalid {axis} tolerance: {value} (expected a finite value >= 0)")]
    InvalidTolerance { axis: &'static str, value: f64 },

    #[error("malformed geometry in title {title:?}: {reason}")]
    MalformedGeometry { title: String, reason: String },

    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list input directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

impl GridError {
    pub(crate) fn malformed(title: &str, reason: impl Into<String>) -> Self {
        GridError::MalformedGeometry {
            title: title.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience Result type alias for GridError.
pub type Result<T> = std::result::Result<T, GridError>;
