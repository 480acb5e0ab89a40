use crate::application::generator::GeneratorSettings;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid listen address '{0}'")]
    InvalidAddress(String),

    #[error("failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub session: SessionSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DataSettings {
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Reference date for relative dates; today when unset.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    #[serde(default = "default_analytics_year")]
    pub analytics_year: i32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SessionSettings {
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_seed() -> u64 {
    42
}

fn default_analytics_year() -> i32 {
    2024
}

fn default_max_sessions() -> usize {
    1024
}

fn default_cookie_name() -> String {
    "dashboard_session".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            as_of: None,
            analytics_year: default_analytics_year(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            cookie_name: default_cookie_name(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl DataSettings {
    /// Fix the reference date, falling back to `today`.
    pub fn resolve(&self, today: NaiveDate) -> GeneratorSettings {
        GeneratorSettings {
            seed: self.seed,
            as_of: self.as_of.unwrap_or(today),
            analytics_year: self.analytics_year,
        }
    }
}

impl AppConfig {
    /// Rendered as TOML for the Setup page.
    pub fn summary(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// `config/dashboard.*` if present, then `DASHBOARD__SECTION__KEY` variables.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
