//! Error types for Brickset

use std::path::PathBuf;
use thiserror::Error;

/// General Brickset error type
#[derive(Debug, Error)]
pub enum BricksetError {
    /// The backing resource could not be opened or read
    #[error("Resource '{}' not found: {source}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource is not valid JSON or does not match the record shape
    #[error("Malformed data in '{}': {source}", path.display())]
    MalformedData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration file could not be read
    #[error("Cannot read config '{}': {source}", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not a valid config document
    #[error("Invalid config '{}': {source}", path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl BricksetError {
    /// Path of the file this error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            BricksetError::ResourceNotFound { path, .. }
            | BricksetError::MalformedData { path, .. }
            | BricksetError::ConfigUnreadable { path, .. }
            | BricksetError::InvalidConfig { path, .. } => path,
        }
    }

    pub fn is_resource_not_found(&self) -> bool {
        matches!(self, BricksetError::ResourceNotFound { .. })
    }

    pub fn is_malformed_data(&self) -> bool {
        matches!(self, BricksetError::MalformedData { .. })
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BricksetError::ConfigUnreadable { .. } | BricksetError::InvalidConfig { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BricksetError>;
