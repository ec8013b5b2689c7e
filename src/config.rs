use std::env;
use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use validator::Validate;

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_FEED_INTERVAL_SECS: u64 = 20;
const DEFAULT_THEME_PATH: &str = "wms-preferences.json";
const CONFIG_DIR: &str = "config";

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    #[serde(default)]
    pub log_json: bool,

    /// Period of the live marketplace order feed.
    #[validate(range(min = 1, message = "feed interval must be at least one second"))]
    #[serde(default = "default_feed_interval_secs")]
    pub feed_interval_secs: u64,

    /// Where the theme preference file lives.
    #[serde(default = "default_theme_path")]
    pub theme_path: PathBuf,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_feed_interval_secs() -> u64 {
    DEFAULT_FEED_INTERVAL_SECS
}

fn default_theme_path() -> PathBuf {
    PathBuf::from(DEFAULT_THEME_PATH)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            feed_interval_secs: default_feed_interval_secs(),
            theme_path: default_theme_path(),
        }
    }
}

/// Loads configuration from optional `config/` files layered with `WMS__*`
/// environment overrides (e.g. `WMS__FEED_INTERVAL_SECS=5`).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

    let cfg: AppConfig = Config::builder()
        .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
        .add_source(File::with_name(&format!("{}/{}", CONFIG_DIR, run_mode)).required(false))
        .add_source(Environment::with_prefix("WMS").separator("__"))
        .build()?
        .try_deserialize()?;

    cfg.validate()
        .map_err(|e| ConfigError::Message(e.to_string()))?;

    Ok(cfg)
}

/// Initializes the global tracing subscriber. `RUST_LOG` overrides the
/// configured level when set.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_directive = format!("wms_core={}", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter_directive));
    if json {
        let _ = registry.with(fmt::layer().json()).try_init();
    } else {
        let _ = registry.with(fmt::layer()).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.feed_interval_secs, 20);
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.log_json);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_feed_interval_is_rejected() {
        let cfg = AppConfig {
            feed_interval_secs: 0,
            ..AppConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
