//! Dataset loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading raw train records.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the dataset file failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON
    #[error("JSON parse error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The dataset's top level is not an array of records
    #[error("expected a JSON array of records in {}", path.display())]
    NotAnArray { path: PathBuf },
}
