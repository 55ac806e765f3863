use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Connection settings for the remote recipe service
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. No timeout is enforced when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_user_agent() -> String {
    concat!("meal-finder/", env!("CARGO_PKG_VERSION")).to_string()
}

impl FinderConfig {
    /// Configuration pointing at a different host, used against local test servers.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with MEAL_FINDER__ prefix
/// 2. meal-finder.toml file in current directory
/// 3. Default values
///
/// Environment variable format: MEAL_FINDER__BASE_URL
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("meal-finder").required(false))
        .add_source(
            Environment::with_prefix("MEAL_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
