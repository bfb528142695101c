use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "petcare-admin";
const CONFIG_FILE: &str = "config.json";

pub const ENV_BRANDING_API_URL: &str = "PETCARE_BRANDING_API_URL";
pub const ENV_PERSONALIZATION_API_URL: &str = "PETCARE_PERSONALIZATION_API_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "PETCARE_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("request_timeout_secs must be greater than zero in {path}")]
    ZeroTimeout { path: PathBuf },

    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("failed to write config: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to encode config: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Base URL of the identity server hosting branding preferences
    pub branding_api_url: String,
    /// Base URL of the pet-care backend storing personalization records
    pub personalization_api_url: String,
    pub request_timeout_secs: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            branding_api_url: "https://localhost:9443".to_string(),
            personalization_api_url: "http://localhost:9091".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl AdminConfig {
    /// Defaults, then the user config file if present, then environment.
    ///
    /// An unreadable or malformed user file is logged and skipped.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path)
                .unwrap_or_else(|e| {
                    log::warn!("[Config] Ignoring {}: {}", path.display(), e);
                    Self::default()
                }),
            _ => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Read an explicit config file; missing keys fall back to defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config: Self =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if config.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                path: path.to_path_buf(),
            });
        }
        Ok(config)
    }

    /// Overlay environment overrides using `lookup` to read variables.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = lookup(ENV_BRANDING_API_URL) {
            self.branding_api_url = url;
        }
        if let Some(url) = lookup(ENV_PERSONALIZATION_API_URL) {
            self.personalization_api_url = url;
        }
        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            self.request_timeout_secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidEnv {
                    name: ENV_REQUEST_TIMEOUT_SECS,
                    value: raw,
                })?;
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Write to the user config file, returning where it went.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::Write(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no user config directory on this platform",
            ))
        })?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn file_values_fill_missing_keys_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "branding_api_url": "https://id.example.com" }"#).unwrap();

        let config = AdminConfig::load_from(&path).unwrap();
        assert_eq!(config.branding_api_url, "https://id.example.com");
        assert_eq!(
            config.personalization_api_url,
            AdminConfig::default().personalization_api_url
        );
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            AdminConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AdminConfig {
            request_timeout_secs: 5,
            ..AdminConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(AdminConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn zero_timeout_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "request_timeout_secs": 0 }"#).unwrap();
        assert!(matches!(
            AdminConfig::load_from(&path),
            Err(ConfigError::ZeroTimeout { .. })
        ));
    }

    #[test]
    fn env_overrides_win() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_PERSONALIZATION_API_URL, "https://pets.example.com"),
            (ENV_REQUEST_TIMEOUT_SECS, "12"),
        ]);
        let mut config = AdminConfig::default();
        config
            .apply_env(|name| env.get(name).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.personalization_api_url, "https://pets.example.com");
        assert_eq!(config.request_timeout(), Duration::from_secs(12));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = AdminConfig::default();
        let err = config
            .apply_env(|name| (name == ENV_REQUEST_TIMEOUT_SECS).then(|| "0".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));
    }
}
