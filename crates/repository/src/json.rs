//! JSON Repository - records loaded from a JSON array file

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use shared::{BricksetError, Result};
use tracing::{debug, info};

use crate::Repository;

/// File-backed, read-only record repository
///
/// The whole file is parsed eagerly at construction. A document that is
/// not a JSON array of `T`-shaped objects is rejected as a whole; there is
/// no partial load.
#[derive(Debug, Clone)]
pub struct JsonRepository<T> {
    source: PathBuf,
    records: Vec<T>,
}

impl<T: DeserializeOwned> JsonRepository<T> {
    /// Load all records from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading records");

        let bytes = std::fs::read(path).map_err(|source| BricksetError::ResourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_slice(&bytes, path)
    }

    /// Parse records from an in-memory JSON document
    ///
    /// `origin` names the document in errors and is reported by `source()`.
    pub fn from_json_str(json: &str, origin: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_slice(json.as_bytes(), origin.as_ref())
    }

    fn from_json_slice(bytes: &[u8], origin: &Path) -> Result<Self> {
        let records: Vec<T> =
            serde_json::from_slice(bytes).map_err(|source| BricksetError::MalformedData {
                path: origin.to_path_buf(),
                source,
            })?;

        info!(
            path = %origin.display(),
            count = records.len(),
            "loaded records"
        );

        Ok(Self {
            source: origin.to_path_buf(),
            records,
        })
    }
}

impl<T> JsonRepository<T> {
    /// Where the records were loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl<T> Repository<T> for JsonRepository<T> {
    fn get_all(&self) -> &[T] {
        &self.records
    }
}
