//! Configuration types for truthserum.
//!
//! [`Config::load`] reads `~/.config/truthserum/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist, then applies `TRUTHSERUM_*`
//! environment overrides (`TRUTHSERUM_SEARCH__LIMIT=20`). [`Config::defaults`]
//! returns the embedded defaults without touching the filesystem (useful in
//! tests).

use crate::{error::ConfigError, types::SearchField};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Hard ceiling on the number of rows a single search may return.
pub const MAX_LIMIT: usize = 1000;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
fields        = ["english", "narrator"]
limit         = 50
expand        = true
min_query_len = 1

[server]
addr = "127.0.0.1:7878"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/truthserum/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Text columns every substring clause is applied to.
    #[serde(default = "default_fields")]
    pub fields: Vec<SearchField>,
    /// Maximum rows returned per search.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// OR synonym clauses from query expansion into the predicate.
    #[serde(default = "default_expand")]
    pub expand: bool,
    /// Trimmed queries shorter than this (in characters) are not sent.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

fn default_fields() -> Vec<SearchField> { vec![SearchField::English, SearchField::Narrator] }
fn default_limit() -> usize { 50 }
fn default_expand() -> bool { true }
fn default_min_query_len() -> usize { 1 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fields: default_fields(),
            limit: default_limit(),
            expand: default_expand(),
            min_query_len: default_min_query_len(),
        }
    }
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
}

fn default_addr() -> String { "127.0.0.1:7878".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr: default_addr() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/truthserum/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load from an explicit file, layered on top of the built-in defaults and
    /// under the environment overrides. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("TRUTHSERUM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("search.fields"),
            )
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Reject settings no search could be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.fields.is_empty() {
            return Err(ConfigError::Invalid("search.fields must not be empty".to_string()));
        }
        if self.search.limit == 0 || self.search.limit > MAX_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "search.limit must be between 1 and {MAX_LIMIT}"
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("truthserum")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.search.fields, vec![SearchField::English, SearchField::Narrator]);
        assert_eq!(cfg.search.limit, 50);
        assert!(cfg.search.expand);
        assert_eq!(cfg.server.addr, "127.0.0.1:7878");
        cfg.validate().unwrap();
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\nfields = [\"arabic\"]\nexpand = false\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.search.fields, vec![SearchField::Arabic]);
        assert!(!cfg.search.expand);
        assert_eq!(cfg.search.limit, 50);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.search.limit, 50);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\nlimit = 0\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn empty_field_list_is_rejected() {
        let mut cfg = Config::defaults();
        cfg.search.fields.clear();
        assert!(cfg.validate().is_err());
    }
}
