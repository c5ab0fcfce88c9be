//! Non-interactive commands
//!
//! One-shot conversion and the supported-currency listing. Both write to any
//! `io::Write` so they can be exercised without a terminal.

use std::io::Write;

use anyhow::Result;

use crate::api::{ConversionResult, RateProvider};
use crate::catalog::display_name;
use crate::logic::formatting::{format_money, format_rate};

/// Flags that select one-shot mode
#[derive(Debug, Clone, PartialEq)]
pub struct OneShot {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

impl OneShot {
    /// One-shot mode needs all three flags and a positive amount
    ///
    /// Codes are upper-cased and trimmed.
    pub fn from_flags(from: Option<&str>, to: Option<&str>, amount: Option<f64>) -> Option<Self> {
        let from = from.map(str::trim).filter(|s| !s.is_empty())?;
        let to = to.map(str::trim).filter(|s| !s.is_empty())?;
        let amount = amount.filter(|a| *a > 0.0)?;

        Some(Self {
            from: from.to_ascii_uppercase(),
            to: to.to_ascii_uppercase(),
            amount,
        })
    }
}

/// Print block for a finished conversion
pub fn format_one_shot(result: &ConversionResult) -> String {
    format!(
        "\nCurrency Conversion:\n\n  {} = {}\n  {}\n",
        format_money(result.amount, &result.from_code),
        format_money(result.converted, &result.to_code),
        format_rate(&result.from_code, result.rate, &result.to_code)
    )
}

/// Run one conversion and print it
///
/// Provider failures come back as a `ConverterError` inside the `anyhow`
/// error, so callers can `downcast_ref` them.
pub async fn run_one_shot<W: Write>(
    provider: &dyn RateProvider,
    request: &OneShot,
    out: &mut W,
) -> Result<ConversionResult> {
    tracing::info!(
        "One-shot conversion {} {} -> {}",
        request.amount,
        request.from,
        request.to
    );

    let result = provider
        .convert(&request.from, &request.to, request.amount)
        .await?;

    write!(out, "{}", format_one_shot(&result))?;
    Ok(result)
}

/// Print every supported code with its name, returning how many were printed
pub async fn run_list<W: Write>(provider: &dyn RateProvider, out: &mut W) -> Result<usize> {
    let codes = provider.supported_currencies().await?;

    for code in &codes {
        let name = display_name(code);
        if name.is_empty() {
            writeln!(out, "{}", code)?;
        } else {
            writeln!(out, "{}  {}", code, name)?;
        }
    }
    Ok(codes.len())
}
