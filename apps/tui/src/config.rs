use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use stellar_scout_core::DEFAULT_API_URL;

pub const API_URL_VAR: &str = "STELLAR_API_URL";
pub const LOG_FILE_VAR: &str = "STELLAR_LOG_FILE";
pub const DEBUG_VAR: &str = "DEBUG";

const DEFAULT_LOG_FILE: &str = "stellar_scout.log";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API URL {url:?}: {reason}")]
    InvalidApiUrl { url: String, reason: String },
    #[error("API URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl AppConfig {
    /// Builds the config from raw variable values. Unset or blank values
    /// take their defaults.
    pub fn from_values(
        api_url: Option<String>,
        log_file: Option<String>,
        debug: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_url = non_blank(api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_api_url(&api_url)?;

        let log_file = non_blank(log_file).map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from);
        let debug = non_blank(debug).is_some_and(|value| value != "0" && value != "false");

        Ok(Self {
            api_url,
            log_file,
            debug,
        })
    }
}

/// Loads `.env` (if any) and reads the application configuration from the
/// environment.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    dotenv().ok();

    AppConfig::from_values(
        env::var(API_URL_VAR).ok(),
        env::var(LOG_FILE_VAR).ok(),
        env::var(DEBUG_VAR).ok(),
    )
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn validate_api_url(url: &str) -> Result<(), ConfigError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidApiUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_file, PathBuf::from("stellar_scout.log"));
        assert!(!config.debug);
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config =
            AppConfig::from_values(Some("  ".to_string()), Some(String::new()), Some(String::new()))
                .unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!config.debug);
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_values(
            Some("https://scout.example.org/api".to_string()),
            Some("/tmp/scout.log".to_string()),
            Some("1".to_string()),
        )
        .unwrap();
        assert_eq!(config.api_url, "https://scout.example.org/api");
        assert_eq!(config.log_file, PathBuf::from("/tmp/scout.log"));
        assert!(config.debug);
    }

    #[test]
    fn debug_zero_is_off() {
        let config = AppConfig::from_values(None, None, Some("0".to_string())).unwrap();
        assert!(!config.debug);
    }

    #[test]
    fn rejects_malformed_url() {
        let error = AppConfig::from_values(Some("localhost:8000 api".to_string()), None, None)
            .unwrap_err();
        assert!(matches!(
            error,
            ConfigError::InvalidApiUrl { .. } | ConfigError::UnsupportedScheme(_)
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let error =
            AppConfig::from_values(Some("ftp://example.org/api".to_string()), None, None)
                .unwrap_err();
        assert!(matches!(error, ConfigError::UnsupportedScheme(scheme) if scheme == "ftp"));
    }
}
