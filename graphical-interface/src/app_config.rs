use std::path::{Path, PathBuf};

use booking::LoyaltyRules;
use serde::Deserialize;

const ENV_PREFIX: &str = "FLIGHT_RESERVATION";

/// Settings for the reservation window, logging and loyalty program.
///
/// Every field has a default, so an absent config file is not an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub start_maximized: bool,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub loyalty: LoyaltyRules,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Flight Reservation System".to_string(),
            start_maximized: true,
            log_dir: PathBuf::from("logs"),
            log_level: "info".to_string(),
            loyalty: LoyaltyRules::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

impl AppConfig {
    /// Loads `config/default`, then `config/local`, then
    /// `FLIGHT_RESERVATION__*` environment variables. All sources are optional.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Same as [`AppConfig::load`] with the config files looked up in `dir`.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let default_file = dir.join("default");
        let local_file = dir.join("local");

        let settings = config::Config::builder()
            .add_source(config::File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&local_file.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
