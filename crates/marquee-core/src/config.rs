use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::MarqueeError;
use crate::models::SortKey;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Environment variable consulted for the TMDB credential.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub tmdb: TmdbConfig,
    pub browse: BrowseConfig,
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbConfig {
    pub api_key: String,
    pub language: String,
    pub api_base: String,
    pub image_base: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseConfig {
    pub default_sort: SortKey,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    pub theme: String,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Dark,
    Light,
}

impl ThemeMode {
    /// Next mode in the toolbar toggle order.
    pub fn next(self) -> Self {
        match self {
            Self::System => Self::Dark,
            Self::Dark => Self::Light,
            Self::Light => Self::System,
        }
    }
}

impl AppConfig {
    /// Load the user config file, if any, layered over built-in defaults.
    pub fn load() -> Result<Self, MarqueeError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path. Keys missing from the file keep their
    /// default values; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, MarqueeError> {
        let mut merged: toml::Table =
            toml::from_str(DEFAULT_CONFIG).map_err(|e| MarqueeError::Config(e.to_string()))?;

        if path.exists() {
            let user_str = std::fs::read_to_string(path)?;
            let user: toml::Table =
                toml::from_str(&user_str).map_err(|e| MarqueeError::Config(e.to_string()))?;
            merge_tables(&mut merged, user);
        }

        toml::Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| MarqueeError::Config(e.to_string()))
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), MarqueeError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), MarqueeError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| MarqueeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Pick the credential: CLI flag, then environment, then config file.
    pub fn api_key(&self, cli: Option<&str>) -> Option<String> {
        let env = std::env::var(API_KEY_ENV).ok();
        resolve_api_key(cli, env.as_deref(), &self.tmdb.api_key)
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Directory for persisted UI state and logs.
    pub fn data_dir() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn log_dir() -> PathBuf {
        Self::data_dir().join("logs")
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "marquee")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

/// First non-blank candidate wins.
pub fn resolve_api_key(cli: Option<&str>, env: Option<&str>, file: &str) -> Option<String> {
    [cli, env, Some(file)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(str::to_string)
}

/// Recursively overlay `user` onto `base`; nested tables merge key by key.
fn merge_tables(base: &mut toml::Table, user: toml::Table) {
    for (key, value) in user {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                    continue;
                }
                base.insert(key, toml::Value::Table(incoming));
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert!(config.tmdb.api_key.is_empty());
        assert_eq!(config.tmdb.language, "en-US");
        assert_eq!(config.tmdb.api_base, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb.image_base, "https://image.tmdb.org/t/p/w500");
        assert_eq!(config.browse.default_sort, SortKey::RatingDesc);
        assert_eq!(config.appearance.mode, ThemeMode::System);
    }

    #[test]
    fn test_theme_mode_cycles() {
        assert_eq!(ThemeMode::System.next(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.next(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.next(), ThemeMode::System);
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.tmdb.api_key = "secret".into();
        config.browse.default_sort = SortKey::ReleaseAsc;
        config.appearance.mode = ThemeMode::Light;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tmdb]\nlanguage = \"de-DE\"\n").unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.tmdb.language, "de-DE");
        assert_eq!(loaded.tmdb.api_base, "https://api.themoviedb.org/3");
        assert_eq!(loaded.browse.default_sort, SortKey::RatingDesc);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[browse]\ndefault_sort = \"sideways\"\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, MarqueeError::Config(_)), "got {err:?}");
    }

    #[test]
    fn test_api_key_precedence() {
        assert_eq!(
            resolve_api_key(Some("cli"), Some("env"), "file").as_deref(),
            Some("cli")
        );
        assert_eq!(
            resolve_api_key(None, Some("env"), "file").as_deref(),
            Some("env")
        );
        assert_eq!(resolve_api_key(None, None, "file").as_deref(), Some("file"));
        assert_eq!(
            resolve_api_key(Some("  "), Some(""), " file ").as_deref(),
            Some("file")
        );
        assert_eq!(resolve_api_key(None, None, ""), None);
    }
}
