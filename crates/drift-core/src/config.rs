use crate::domain::{ChartKind, TimeRange};
use crate::i18n::Language;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://browser-wellbeing-server.onrender.com";
pub const DEFAULT_THRESHOLD_SECONDS: f64 = 5.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("fichier de configuration introuvable: {path}")]
    NotFound { path: String },

    #[error("erreur de lecture: {source}")]
    Read {
        #[from]
        source: std::io::Error,
    },

    #[error("erreur de parsing TOML: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    pub language: Language,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Minimum time for a site to be charted on its own rather than folded
    /// into the "Others" bucket.
    pub threshold_seconds: f64,
    pub default_chart: ChartKind,
    pub default_range: TimeRange,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            threshold_seconds: DEFAULT_THRESHOLD_SECONDS,
            default_chart: ChartKind::Bar,
            default_range: TimeRange::Today,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("drift")
            .join("config.toml")
    }
}
