//! Runtime settings from `.env` and the process environment.

mod app_config;

pub use app_config::{init_app_config, AppConfig, ConfigError, GeocoderConfig};
