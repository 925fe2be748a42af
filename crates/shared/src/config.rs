//! Configuration types for Brickset

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::BricksetError;

/// Resource name of the bundled LEGO set dataset
pub const DEFAULT_DATASET: &str = "brickset.json";

/// Directory resources are resolved against
pub const DEFAULT_RESOURCE_DIR: &str = "resources";

/// Where the dataset lives (brickset.json / config.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BricksetConfig {
    /// Directory relative resource names are resolved against
    ///
    /// When loaded with `from_file`, a relative directory is taken relative
    /// to the config file's own directory.
    #[serde(default = "default_resource_dir")]
    pub resource_dir: PathBuf,

    /// Dataset resource name, or an absolute path
    #[serde(default = "default_dataset")]
    pub dataset: PathBuf,
}

fn default_resource_dir() -> PathBuf {
    PathBuf::from(DEFAULT_RESOURCE_DIR)
}

fn default_dataset() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET)
}

impl Default for BricksetConfig {
    fn default() -> Self {
        Self {
            resource_dir: default_resource_dir(),
            dataset: default_dataset(),
        }
    }
}

impl BricksetConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| BricksetError::ConfigUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let mut config: Self =
            serde_json::from_str(&content).map_err(|source| BricksetError::InvalidConfig {
                path: path.to_path_buf(),
                source,
            })?;

        if config.resource_dir.is_relative() {
            if let Some(base) = path.parent() {
                config.resource_dir = base.join(&config.resource_dir);
            }
        }
        Ok(config)
    }

    /// Builder: point at a specific dataset file
    ///
    /// The path is used as given (relative to the working directory), not
    /// resolved against `resource_dir`.
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.resource_dir = PathBuf::new();
        self.dataset = path.into();
        self
    }

    /// Resolved dataset location
    ///
    /// An absolute `dataset` is used as-is; otherwise it is joined onto
    /// `resource_dir`.
    pub fn dataset_path(&self) -> PathBuf {
        if self.dataset.is_absolute() {
            self.dataset.clone()
        } else {
            self.resource_dir.join(&self.dataset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "resourceDir": "data",
            "dataset": "sets.json"
        }"#;

        let config: BricksetConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.dataset_path(), PathBuf::from("data").join("sets.json"));
    }

    #[test]
    fn test_config_defaults() {
        let config: BricksetConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BricksetConfig::default());
        assert_eq!(
            config.dataset_path(),
            PathBuf::from(DEFAULT_RESOURCE_DIR).join(DEFAULT_DATASET)
        );
    }

    #[test]
    fn test_absolute_dataset_ignores_resource_dir() {
        let dir = tempfile::tempdir().unwrap();
        let absolute = dir.path().join("custom.json");

        let config = BricksetConfig::default().with_dataset_path(&absolute);
        assert_eq!(config.dataset_path(), absolute);
    }

    #[test]
    fn test_relative_dataset_path_used_as_given() {
        let config = BricksetConfig::default().with_dataset_path("resources/brickset.json");
        assert_eq!(config.dataset_path(), PathBuf::from("resources/brickset.json"));

        let config = BricksetConfig {
            resource_dir: PathBuf::from("/srv/lego"),
            dataset: PathBuf::from("sets.json"),
        }
        .with_dataset_path("local.json");
        assert_eq!(config.dataset_path(), PathBuf::from("local.json"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dataset": "other.json"}}"#).unwrap();

        let config = BricksetConfig::from_file(file.path()).unwrap();
        let base = file.path().parent().unwrap();
        assert_eq!(config.resource_dir, base.join(DEFAULT_RESOURCE_DIR));
        assert_eq!(config.dataset, PathBuf::from("other.json"));
    }

    #[test]
    fn test_resource_dir_relative_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brickset.config.json");
        std::fs::write(&path, r#"{"resourceDir": "data", "dataset": "sets.json"}"#).unwrap();

        let config = BricksetConfig::from_file(&path).unwrap();
        assert_eq!(config.dataset_path(), dir.path().join("data").join("sets.json"));
    }

    #[test]
    fn test_absolute_resource_dir_kept() {
        let dir = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        let path = dir.path().join("brickset.config.json");
        let json = serde_json::json!({ "resourceDir": data.path() });
        std::fs::write(&path, json.to_string()).unwrap();

        let config = BricksetConfig::from_file(&path).unwrap();
        assert_eq!(config.resource_dir, data.path());
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = BricksetConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, BricksetError::ConfigUnreadable { .. }));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"resourceDir": 7}}"#).unwrap();

        let err = BricksetConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, BricksetError::InvalidConfig { .. }));
        assert!(err.is_config_error());
    }
}
