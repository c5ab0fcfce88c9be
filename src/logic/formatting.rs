//! Formatting and display logic
//!
//! Pure functions for formatting amounts, rates and timestamps.

use chrono::{DateTime, Local, Utc};

/// Format an amount with its currency code, two decimals
///
/// # Examples
/// ```
/// use currency_converter::logic::formatting::format_money;
///
/// assert_eq!(format_money(100.0, "USD"), "100.00 USD");
/// assert_eq!(format_money(45.0, "EUR"), "45.00 EUR");
/// ```
pub fn format_money(amount: f64, code: &str) -> String {
    format!("{:.2} {}", amount, code)
}

/// Format a rate line, four decimals
///
/// # Examples
/// ```
/// use currency_converter::logic::formatting::format_rate;
///
/// assert_eq!(format_rate("USD", 0.9, "EUR"), "Rate: 1 USD = 0.9000 EUR");
/// ```
pub fn format_rate(from: &str, rate: f64, to: &str) -> String {
    format!("Rate: 1 {} = {:.4} {}", from, rate, to)
}

/// Format the provider's last-update time in the local timezone
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `CODE - Name`, or `CODE - ` when the name is unknown
pub fn format_currency_label(code: &str, name: &str) -> String {
    format!("{} - {}", code, name)
}
