//! Sources of raw train records.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::error::LoadError;

/// Something that can produce the full set of raw train documents.
///
/// Each call returns a fresh snapshot. Document order is whatever the
/// source holds and is assumed stable within one load.
pub trait RecordSource {
    fn load_all(&self) -> Result<Vec<Value>, LoadError>;
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn load_all(&self) -> Result<Vec<Value>, LoadError> {
        (**self).load_all()
    }
}

/// Reads records from a JSON file whose top level is an array.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the dataset path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load_all(&self) -> Result<Vec<Value>, LoadError> {
        // The file is closed when the reader drops, on every return path.
        let file = File::open(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        let value: Value =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Json {
                path: self.path.clone(),
                source,
            })?;

        let Value::Array(records) = value else {
            return Err(LoadError::NotAnArray {
                path: self.path.clone(),
            });
        };

        debug!(path = %self.path.display(), count = records.len(), "loaded train records");
        Ok(records)
    }
}

/// Serves a fixed set of records held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<Value>,
}

impl InMemorySource {
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    /// Build a source from JSON text holding an array of records.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let path = PathBuf::from("<memory>");
        let value: Value = serde_json::from_str(json).map_err(|source| LoadError::Json {
            path: path.clone(),
            source,
        })?;

        match value {
            Value::Array(records) => Ok(Self { records }),
            _ => Err(LoadError::NotAnArray { path }),
        }
    }
}

impl RecordSource for InMemorySource {
    fn load_all(&self) -> Result<Vec<Value>, LoadError> {
        Ok(self.records.clone())
    }
}
