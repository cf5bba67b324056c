//! Finder configuration and fixed formats.

use std::path::PathBuf;

/// Maximum number of trains returned by a query.
pub const MAX_RESULTS: usize = 3;

/// chrono format for record times, both parsed and displayed.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Dataset path used when nothing else is configured.
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Environment variable overriding the dataset path.
pub const DATA_PATH_ENV: &str = "TRAIN_DATA_PATH";

/// Configuration parameters for the finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Maximum number of trains to return.
    pub max_results: usize,

    /// Path of the JSON dataset.
    pub data_path: PathBuf,
}

impl FinderConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_results: usize, data_path: impl Into<PathBuf>) -> Self {
        Self {
            max_results,
            data_path: data_path.into(),
        }
    }

    /// Default configuration with the dataset path taken from
    /// `TRAIN_DATA_PATH` when it is set and non-empty.
    pub fn from_env() -> Self {
        Self::with_data_path_override(std::env::var(DATA_PATH_ENV).ok())
    }

    fn with_data_path_override(path: Option<String>) -> Self {
        match path {
            Some(path) if !path.is_empty() => Self {
                data_path: PathBuf::from(path),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}
