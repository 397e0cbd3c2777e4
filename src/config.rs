//! Configuration handling for the TUI

use crate::api::DEFAULT_ADDRESS;
use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured API address
pub const API_ADDRESS_ENV: &str = "FORM_BUILDER_API_ADDRESS";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Forms API base address
    pub api_address: Option<String>,
    /// Email of the last successful login, prefilled on the login screen
    pub last_email: Option<String>,
}

/// Log file name inside [`log_dir`]
pub const LOG_FILE: &str = "form-builder-tui.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "formbuilder", "form-builder-tui")
}

/// Directory the log file is written to
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user's config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Read a config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(anyhow!("Failed to read {}: {}", path.display(), e)),
        };
        serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    /// Save configuration to the user's config directory
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))
    }

    /// API address to use: environment first, then the file, then the default
    pub fn api_address(&self) -> String {
        resolve_address(std::env::var(API_ADDRESS_ENV).ok(), self.api_address.as_deref())
    }
}

fn resolve_address(from_env: Option<String>, configured: Option<&str>) -> String {
    from_env
        .filter(|a| !a.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.api_address.is_none());
        assert!(config.last_email.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            api_address: Some("https://forms.example.com/api".to_string()),
            last_email: Some("jane@example.com".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"last_email": "jane@example.com", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.last_email, Some("jane@example.com".to_string()));
    }

    mod files {
        use super::*;

        fn scratch_path(name: &str) -> PathBuf {
            std::env::temp_dir()
                .join(format!("form-builder-tui-{}-{}", std::process::id(), name))
                .join("config.json")
        }

        #[test]
        fn test_save_then_load() {
            let path = scratch_path("roundtrip");
            let config = TuiConfig {
                api_address: None,
                last_email: Some("jane@example.com".to_string()),
            };
            config.save_to(&path).unwrap();
            assert_eq!(TuiConfig::load_from(&path).unwrap(), config);
            let _ = fs::remove_dir_all(path.parent().unwrap());
        }

        #[test]
        fn test_missing_file_is_default() {
            let path = scratch_path("missing");
            assert_eq!(TuiConfig::load_from(&path).unwrap(), TuiConfig::default());
        }

        #[test]
        fn test_corrupt_file_is_an_error() {
            let path = scratch_path("corrupt");
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "{not json").unwrap();
            let err = TuiConfig::load_from(&path).unwrap_err();
            assert!(err.to_string().starts_with("Failed to parse"));
            let _ = fs::remove_dir_all(path.parent().unwrap());
        }
    }

    #[test]
    fn test_log_dir_is_separate_from_config() {
        if let (Some(logs), Some(config)) = (log_dir(), TuiConfig::config_path()) {
            assert!(logs.ends_with("logs"));
            assert_ne!(Some(logs.as_path()), config.parent());
        }
    }

    mod address_resolution {
        use super::*;

        #[test]
        fn test_env_wins() {
            assert_eq!(
                resolve_address(Some("http://env".to_string()), Some("http://file")),
                "http://env"
            );
        }

        #[test]
        fn test_blank_env_ignored() {
            assert_eq!(
                resolve_address(Some("  ".to_string()), Some("http://file")),
                "http://file"
            );
        }

        #[test]
        fn test_falls_back_to_default() {
            assert_eq!(resolve_address(None, None), DEFAULT_ADDRESS);
        }
    }
}
