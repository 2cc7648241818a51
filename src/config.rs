//! Configuration file support

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".compass.json";
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Google Directions API endpoint
    #[serde(default = "default_directions_endpoint")]
    pub directions_endpoint: String,

    /// Translation endpoint (gtx protocol)
    #[serde(default = "default_translate_endpoint")]
    pub translate_endpoint: String,

    /// Knowledge table file replacing the embedded tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_path: Option<PathBuf>,

    /// Directions API key; prefer the environment over storing it here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_directions_endpoint() -> String {
    "https://maps.googleapis.com/maps/api/directions/json".to_string()
}

fn default_translate_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            directions_endpoint: default_directions_endpoint(),
            translate_endpoint: default_translate_endpoint(),
            knowledge_path: None,
            api_key: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl GuideConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `explicit`, else the first config file found, else defaults.
    /// The API key from the environment wins over the file.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit.map(Path::to_path_buf).or_else(find_config) {
            Some(path) => {
                tracing::info!("Loading config from {}", path.display());
                Self::from_file(&path)?
            }
            None => Self::default(),
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config = config.with_api_key(key);
        }

        Ok(config)
    }

    /// Override the API key; blank keys are ignored
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !key.trim().is_empty() {
            self.api_key = Some(key);
        }
        self
    }
}

fn find_config() -> Option<PathBuf> {
    // Current directory first
    let local_config = PathBuf::from(CONFIG_FILE_NAME);
    if local_config.exists() {
        return Some(local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(CONFIG_FILE_NAME);
        if home_config.exists() {
            return Some(home_config);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"directions_endpoint": "http://localhost:8080/directions"}}"#).unwrap();

        let config = GuideConfig::from_file(file.path()).unwrap();
        assert_eq!(config.directions_endpoint, "http://localhost:8080/directions");
        assert_eq!(config.translate_endpoint, default_translate_endpoint());
        assert!(config.api_key.is_none());
        assert!(config.knowledge_path.is_none());
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            GuideConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            GuideConfig::load(Some(&missing)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let config = GuideConfig::default().with_api_key("   ");
        assert!(config.api_key.is_none());

        let config = GuideConfig::default().with_api_key("abc");
        assert_eq!(config.api_key.as_deref(), Some("abc"));
    }
}
