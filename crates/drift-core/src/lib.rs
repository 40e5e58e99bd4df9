//! Drift core library
//!
//! Contains domain types and port definitions (traits) for the Drift client.
//! This crate has no knowledge of infrastructure concerns.

pub mod config;
pub mod domain;
pub mod i18n;
pub mod ports;
pub mod secrets;

pub use config::{Config, ConfigError, DashboardConfig, GeneralConfig, ServerConfig};
pub use domain::{
    build_chart_data, others_label, AuthToken, ChartDataError, ChartEntry, ChartKind, Credentials,
    SiteUsage, TimeRange,
};
pub use i18n::{Language, Translator, UnsupportedLanguageError};
pub use ports::{WellbeingGateway, WellbeingGatewayError};
pub use secrets::{clear_token, resolve_token, store_token, SecretsError, StoredToken};
