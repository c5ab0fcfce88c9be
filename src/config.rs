use std::time::Duration;

use crate::errors::{ConverterError, API_KEY_VAR};

/// Overrides the provider endpoint (used for self-hosted mirrors and tests)
pub const BASE_URL_VAR: &str = "EXCHANGE_RATE_API_URL";

/// Overrides the HTTP timeout, in whole seconds
pub const TIMEOUT_VAR: &str = "EXCHANGE_RATE_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from `.env` (if present) and the process environment
    ///
    /// Variables already set in the environment win over `.env` entries.
    pub fn load() -> Result<Self, ConverterError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConverterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConverterError::MissingApiKey { var: API_KEY_VAR })?;

        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "Invalid {} value {:?}, using {:?}",
                        TIMEOUT_VAR,
                        raw,
                        DEFAULT_TIMEOUT
                    );
                    DEFAULT_TIMEOUT
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConverterError::MissingApiKey { var: API_KEY_VAR });
    }

    #[test]
    fn test_blank_api_key_is_error() {
        let err = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert_eq!(err, ConverterError::MissingApiKey { var: API_KEY_VAR });
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "abc123")])).unwrap();
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "abc123"),
            (BASE_URL_VAR, "http://127.0.0.1:9000/v6/"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000/v6");
    }

    #[test]
    fn test_timeout_override() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "abc123"),
            (TIMEOUT_VAR, "3"),
        ]))
        .unwrap();
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        for raw in ["zero", "0", "-4", ""] {
            let config = Config::from_lookup(lookup_from(&[
                (API_KEY_VAR, "abc123"),
                (TIMEOUT_VAR, raw),
            ]))
            .unwrap();
            assert_eq!(config.timeout, DEFAULT_TIMEOUT, "raw value {:?}", raw);
        }
    }
}
