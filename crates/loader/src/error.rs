use std::{path::PathBuf, result};

use crate::ShardKind;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Data directory not found at {0}")]
    DataDirNotFound(PathBuf),

    #[error("Data file not found at {0}")]
    ShardNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in {location}: {source}")]
    InvalidJson {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}: data must be an array")]
    NotAnArray(ShardKind),

    #[error("{0}: no valid items found in data")]
    NoValidItems(ShardKind),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to load data from {url}: {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Loader task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = result::Result<T, LoadError>;
