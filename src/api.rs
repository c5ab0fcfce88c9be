use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::Config;
use crate::errors::ConverterError;

/// Base currency used when enumerating supported codes
const LISTING_BASE: &str = "USD";

/// Payload of `GET /{key}/latest/{base}`
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateResponse {
    pub result: String,
    #[serde(default)]
    pub base_code: String,
    #[serde(default)]
    pub conversion_rates: HashMap<String, f64>,
    #[serde(default)]
    pub time_last_update_unix: i64,
    #[serde(default)]
    pub time_next_update_unix: i64,
    /// Present only on failure (e.g. "invalid-key", "unsupported-code")
    #[serde(rename = "error-type", default)]
    pub error_type: Option<String>,
}

impl ExchangeRateResponse {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.time_last_update_unix, 0).unwrap_or_default()
    }
}

/// Outcome of a single successful conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub from_code: String,
    pub to_code: String,
    pub amount: f64,
    pub rate: f64,
    pub converted: f64,
    pub last_updated: DateTime<Utc>,
}

impl ConversionResult {
    pub fn new(
        from_code: impl Into<String>,
        to_code: impl Into<String>,
        amount: f64,
        rate: f64,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            from_code: from_code.into(),
            to_code: to_code.into(),
            amount,
            rate,
            converted: amount * rate,
            last_updated,
        }
    }
}

/// Source of exchange rates
///
/// The interactive session and the one-shot command only talk to this trait,
/// so either can run against a stub.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Convert `amount` units of `from` into `to`. Callers guarantee `amount > 0`.
    async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<ConversionResult, ConverterError>;

    /// All codes the provider knows for the USD base, sorted ascending
    async fn supported_currencies(&self) -> Result<Vec<String>, ConverterError>;
}

/// HTTP client for ExchangeRate-API v6
#[derive(Clone)]
pub struct ExchangeRateClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl ExchangeRateClient {
    pub fn new(config: &Config) -> Result<Self, ConverterError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConverterError::Network(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    fn latest_url(&self, base: &str) -> String {
        format!(
            "{}/{}/latest/{}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(base)
        )
    }

    /// Fetch the full rate table for `base`
    pub async fn get_exchange_rates(
        &self,
        base: &str,
    ) -> Result<ExchangeRateResponse, ConverterError> {
        tracing::debug!("Fetching rates for base {}", base);

        let response = self.client.get(self.latest_url(base)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            // Error bodies usually still carry an "error-type"
            let detail = serde_json::from_str::<ExchangeRateResponse>(&body)
                .ok()
                .and_then(|r| r.error_type);
            let message = match detail {
                Some(kind) => format!("status code: {} ({})", status.as_u16(), kind),
                None => format!("status code: {}", status.as_u16()),
            };
            return Err(ConverterError::Upstream(message));
        }

        let rates: ExchangeRateResponse = serde_json::from_str(&body)
            .map_err(|e| ConverterError::Upstream(format!("failed to decode response: {}", e)))?;

        if !rates.is_success() {
            return Err(ConverterError::Upstream(
                rates.error_type.clone().unwrap_or_else(|| rates.result.clone()),
            ));
        }

        tracing::debug!(
            "Received {} rates for {} (updated {})",
            rates.conversion_rates.len(),
            rates.base_code,
            rates.time_last_update_unix
        );

        Ok(rates)
    }
}

#[async_trait]
impl RateProvider for ExchangeRateClient {
    async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<ConversionResult, ConverterError> {
        let rates = self.get_exchange_rates(from).await?;
        conversion_from_rates(&rates, from, to, amount)
    }

    async fn supported_currencies(&self) -> Result<Vec<String>, ConverterError> {
        let rates = self.get_exchange_rates(LISTING_BASE).await?;
        Ok(sorted_codes(&rates))
    }
}

/// Pick the `to` rate out of a rate table and apply it to `amount`
pub fn conversion_from_rates(
    rates: &ExchangeRateResponse,
    from: &str,
    to: &str,
    amount: f64,
) -> Result<ConversionResult, ConverterError> {
    let rate = *rates
        .conversion_rates
        .get(to)
        .ok_or_else(|| ConverterError::UnknownCurrency(to.to_string()))?;

    if !rate.is_finite() || rate <= 0.0 {
        return Err(ConverterError::Upstream(format!(
            "invalid rate {} for {}",
            rate, to
        )));
    }

    Ok(ConversionResult::new(
        from,
        to,
        amount,
        rate,
        rates.last_updated(),
    ))
}

/// Codes of a rate table, sorted ascending
pub fn sorted_codes(rates: &ExchangeRateResponse) -> Vec<String> {
    let mut codes: Vec<String> = rates.conversion_rates.keys().cloned().collect();
    codes.sort();
    codes
}
