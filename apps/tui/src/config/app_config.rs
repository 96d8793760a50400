use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_LOG_FILE: &str = "blankspot.log";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got `{value}`")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must be a positive whole number, got `{value}`")]
    InvalidNumber { var: &'static str, value: String },
}

/// Where place search goes. Nominatim unless offline search is asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocoderConfig {
    Nominatim { url: String },
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub geocoder: GeocoderConfig,
    pub blankspot_file: Option<PathBuf>,
    pub http_timeout: Duration,
    pub log_file: PathBuf,
    pub debug: bool,
}

/// Loads `.env` if present, then reads the environment.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    dotenv().ok();
    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    /// Builds the config from any key lookup, so tests don't touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_url = get("BLANKSPOT_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_url("BLANKSPOT_API_URL", &api_url)?;

        let geocoder = if get("GEOCODER_OFFLINE").is_some_and(|value| is_truthy(&value)) {
            GeocoderConfig::Offline
        } else {
            let url = get("GEOCODER_URL").unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_string());
            validate_url("GEOCODER_URL", &url)?;
            GeocoderConfig::Nominatim { url }
        };

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: "HTTP_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            api_url,
            geocoder,
            blankspot_file: get("BLANKSPOT_FILE").map(PathBuf::from),
            http_timeout,
            log_file: get("LOG_FILE").map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from),
            debug: get("DEBUG").is_some_and(|value| is_truthy(&value)),
        })
    }
}

fn validate_url(var: &'static str, value: &str) -> Result<(), ConfigError> {
    match reqwest::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => Ok(()),
        _ => Err(ConfigError::InvalidUrl {
            var,
            value: value.to_string(),
        }),
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() -> Result<(), ConfigError> {
        let config = config_from(&[])?;
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(
            config.geocoder,
            GeocoderConfig::Nominatim {
                url: DEFAULT_GEOCODER_URL.to_string()
            }
        );
        assert_eq!(config.blankspot_file, None);
        assert_eq!(config.http_timeout, Duration::from_secs(15));
        assert_eq!(config.log_file, PathBuf::from("blankspot.log"));
        assert!(!config.debug);
        Ok(())
    }

    #[test]
    fn overrides_are_read() -> Result<(), ConfigError> {
        let config = config_from(&[
            ("BLANKSPOT_API_URL", "https://api.example.id"),
            ("GEOCODER_OFFLINE", "true"),
            ("BLANKSPOT_FILE", "data/blankspot.json"),
            ("HTTP_TIMEOUT_SECS", "3"),
            ("DEBUG", "1"),
        ])?;
        assert_eq!(config.api_url, "https://api.example.id");
        assert_eq!(config.geocoder, GeocoderConfig::Offline);
        assert_eq!(config.blankspot_file, Some(PathBuf::from("data/blankspot.json")));
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert!(config.debug);
        Ok(())
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config_from(&[("BLANKSPOT_API_URL", "localhost:5000")]),
            Err(ConfigError::InvalidUrl {
                var: "BLANKSPOT_API_URL",
                value: "localhost:5000".to_string()
            })
        );
        assert!(matches!(
            config_from(&[("HTTP_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            config_from(&[("GEOCODER_URL", "nominatim")]),
            Err(ConfigError::InvalidUrl { var: "GEOCODER_URL", .. })
        ));
    }

    #[test]
    fn urls_must_parse_with_a_host() {
        for bad in ["http://", "https://exa mple.id", "ftp://files.example.id", "http//api.example.id"] {
            assert!(
                matches!(
                    config_from(&[("BLANKSPOT_API_URL", bad)]),
                    Err(ConfigError::InvalidUrl { .. })
                ),
                "`{bad}` should be rejected"
            );
        }
        assert!(config_from(&[("BLANKSPOT_API_URL", "http://127.0.0.1:5000/")]).is_ok());
        assert!(config_from(&[("GEOCODER_URL", "https://nominatim.example.id/osm")]).is_ok());
    }

    #[test]
    fn online_geocoder_is_the_default_and_offline_is_opt_in() -> Result<(), ConfigError> {
        assert!(matches!(config_from(&[])?.geocoder, GeocoderConfig::Nominatim { .. }));
        assert!(matches!(
            config_from(&[("GEOCODER_OFFLINE", "no")])?.geocoder,
            GeocoderConfig::Nominatim { .. }
        ));
        assert_eq!(
            config_from(&[("GEOCODER_OFFLINE", "1"), ("GEOCODER_URL", "not a url")])?.geocoder,
            GeocoderConfig::Offline
        );
        Ok(())
    }
}
