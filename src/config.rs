//! Configuration loading and management
//!
//! Handles parsing of `studyplan.toml` configuration files.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::Storage;
use crate::store::StorePolicy;

/// Config file name searched in the config dir and the current directory
pub const CONFIG_FILE: &str = "studyplan.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Store location
    #[serde(default)]
    pub store: StoreConfig,

    /// Validation policy
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Subject handling
    #[serde(default)]
    pub subjects: SubjectsConfig,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Store-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the task store file (default: per-user data dir)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Validation policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Refuse tasks whose title duplicates an existing one
    #[serde(default = "default_unique_titles")]
    pub unique_titles: bool,
}

fn default_unique_titles() -> bool {
    true
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            unique_titles: default_unique_titles(),
        }
    }
}

/// Subject configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectsConfig {
    /// Fixed subject set; empty means free-text subjects
    #[serde(default)]
    pub allowed: Vec<String>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// strftime format for dates outside the relative-label window
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    "%d %b %Y".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config file and load it, or return defaults.
    ///
    /// An explicitly requested file must exist; the searched locations
    /// (platform config dir, then current directory) are optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::InvalidConfig(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Self::load(path);
        }

        for candidate in Self::search_paths() {
            if candidate.exists() {
                return Self::load(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dirs) = ProjectDirs::from("", "", "studyplan") {
            paths.push(dirs.config_dir().join(CONFIG_FILE));
        }
        paths.push(PathBuf::from(CONFIG_FILE));
        paths
    }

    /// Resolved store file path
    pub fn store_path(&self) -> PathBuf {
        self.store
            .path
            .clone()
            .unwrap_or_else(Storage::default_path)
    }

    /// Validation policy for the task store
    pub fn store_policy(&self) -> StorePolicy {
        StorePolicy {
            unique_titles: self.validation.unique_titles,
            allowed_subjects: self.subjects.allowed.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        for subject in &self.subjects.allowed {
            if subject.trim().is_empty() {
                return Err(Error::InvalidConfig(
                    "subjects.allowed cannot include empty entries".to_string(),
                ));
            }
        }
        if self.display.date_format.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "display.date_format cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_permissive_except_titles() {
        let config = Config::default();
        assert!(config.validation.unique_titles);
        assert!(config.subjects.allowed.is_empty());
        assert_eq!(config.display.date_format, "%d %b %Y");
        assert!(config.store.path.is_none());
    }

    #[test]
    fn load_parses_overrides() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r#"
[store]
path = "/tmp/studyplan/tasks.json"

[validation]
unique_titles = false

[subjects]
allowed = ["Math", "History"]

[display]
date_format = "%Y-%m-%d"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.validation.unique_titles);
        assert_eq!(config.subjects.allowed, vec!["Math", "History"]);
        assert_eq!(config.display.date_format, "%Y-%m-%d");
        assert_eq!(
            config.store_path(),
            PathBuf::from("/tmp/studyplan/tasks.json")
        );
    }

    #[test]
    fn empty_allowed_subject_is_invalid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[subjects]\nallowed = [\"Math\", \"  \"]\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn explicit_missing_config_errors() {
        let err = Config::resolve(Some(Path::new("/nonexistent/studyplan.toml"))).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn policy_mirrors_config() {
        let mut config = Config::default();
        config.validation.unique_titles = false;
        config.subjects.allowed = vec!["Math".to_string()];

        let policy = config.store_policy();
        assert!(!policy.unique_titles);
        assert_eq!(policy.allowed_subjects, vec!["Math"]);
    }
}
