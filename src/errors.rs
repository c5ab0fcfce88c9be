//! Error taxonomy
//!
//! Every failure the converter can surface to the user maps to one
//! `ConverterError` variant. Configuration errors are fatal before the UI
//! starts; everything else is shown on the error screen (interactive mode) or
//! printed as `Error: <message>` (one-shot mode).

use thiserror::Error;

/// Environment variable holding the ExchangeRate-API key
pub const API_KEY_VAR: &str = "EXCHANGE_RATE_API_KEY";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConverterError {
    /// Required API key is missing from the environment and `.env`
    #[error(
        "{var} environment variable is not set.\n\
         Please create a .env file with your API key or set the environment variable.\n\
         Get your free API key at: https://www.exchangerate-api.com/"
    )]
    MissingApiKey { var: &'static str },

    /// Transport failure (connect, timeout, body read)
    #[error("failed to fetch exchange rates: {0}")]
    Network(String),

    /// Provider answered, but not with a usable success payload
    #[error("API returned error: {0}")]
    Upstream(String),

    /// Target code missing from the returned rate table
    #[error("currency {0} not found")]
    UnknownCurrency(String),

    /// Amount text that is not a positive, finite number
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

impl From<reqwest::Error> for ConverterError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return ConverterError::Upstream(format!("status code: {}", status.as_u16()));
        }
        // The request URL carries the API key
        ConverterError::Network(err.without_url().to_string())
    }
}
