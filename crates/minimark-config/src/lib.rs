//! Loads the parser's feature set from a TOML file.
//!
//! ```toml
//! preset = "standard"
//! enable = ["allowMultipleLineBreaks"]
//! disable = ["headings"]
//! ```

use minimark_core::{Feature, FeatureSet, Parser};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Starting point for [`Config::feature_set`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Standard,
    All,
    #[serde(rename = "none")]
    Empty,
}

impl Preset {
    pub fn feature_set(self) -> FeatureSet {
        match self {
            Preset::Standard => FeatureSet::standard(),
            Preset::All => FeatureSet::all(),
            Preset::Empty => FeatureSet::empty(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preset: Preset,
    pub enable: Vec<Feature>,
    pub disable: Vec<Feature>,
}

impl Config {
    /// The preset, plus everything in `enable`, minus everything in
    /// `disable`. A feature listed in both ends up disabled.
    pub fn feature_set(&self) -> FeatureSet {
        let enabled = self
            .enable
            .iter()
            .fold(self.preset.feature_set(), |set, f| set.with(*f));
        self.disable.iter().fold(enabled, |set, f| set.without(*f))
    }

    pub fn parser(&self) -> Parser {
        Parser::new(self.feature_set())
    }

    /// Loads the config at `config_path`, after expanding `~` and
    /// environment variables in it. A missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        let config_path = Self::expand_path(config_path).unwrap_or_else(|| config_path.to_path_buf());
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.clone(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.clone(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/minimark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
