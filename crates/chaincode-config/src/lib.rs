use chaincode_engine::{ChainError, Notation};
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

    #[error("Invalid notation settings: {0}")]
    InvalidNotation(#[from] ChainError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tag prefix of the inline notation, `CQ` for `[CQ:at,qq=1]`.
    pub prefix: String,
    /// `qq` value of an `at` segment that mentions everyone.
    pub mention_all_target: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: Notation::DEFAULT_PREFIX.to_string(),
            mention_all_target: Notation::DEFAULT_MENTION_ALL_TARGET.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.validate()?;

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
        let config_dir = shellexpand::tilde("~/.config/chaincode");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Checks `prefix` and `mention_all_target` against the tag grammar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.notation().map(|_| ())
    }

    pub fn notation(&self) -> Result<Notation, ConfigError> {
        Ok(Notation::new(
            self.prefix.as_str(),
            self.mention_all_target.as_str(),
        )?)
    }
}
