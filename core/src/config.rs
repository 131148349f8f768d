//! Layered configuration for the board.
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. `board.toml` in the working directory
//! 3. An explicitly named TOML file (e.g. `--config`)
//! 4. `BOARD_*` environment variables, `__` separating sections
//!    (`BOARD_SESSION__DEFAULT_SORT=newest`)

use crate::catalog::{Catalog, CatalogSeed};
use crate::error::BoardResult;
use crate::query::{SessionState, SortMode, TopicFilter};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = "board.toml";
pub const ENV_PREFIX: &str = "BOARD_";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    #[serde(default)]
    pub default_sort: SortMode,
    #[serde(default)]
    pub default_topic_filter: TopicFilter,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedConfig {
    /// JSON seed file replacing the built-in sample data.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl BoardConfig {
    pub fn figment(extra_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            figment = figment.merge(Toml::file(local));
        }
        if let Some(path) = extra_file {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(extra_file: Option<&Path>) -> BoardResult<Self> {
        if let Some(path) = extra_file {
            if !path.exists() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )
                .into());
            }
        }
        let config: Self = Self::figment(extra_file).extract()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn session_state(&self) -> SessionState {
        SessionState::new(self.session.default_topic_filter, self.session.default_sort)
    }

    pub fn seed_catalog(&self, now_ms: i64) -> BoardResult<Catalog> {
        match &self.seed.path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading seed file");
                Ok(Catalog::from_seed(CatalogSeed::load(path)?))
            }
            None => Ok(Catalog::sample(now_ms)),
        }
    }
}
