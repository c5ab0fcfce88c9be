//! Amount parsing
//!
//! Validates the text typed on the amount screen before any request is made.

use crate::errors::ConverterError;

/// Parse amount text into a positive, finite number
///
/// Surrounding whitespace is ignored. Anything else that does not parse, is
/// not finite, or is not greater than zero is rejected with the original text.
///
/// # Examples
/// ```
/// use currency_converter::logic::amount::parse_amount;
///
/// assert_eq!(parse_amount("100").unwrap(), 100.0);
/// assert_eq!(parse_amount(" 2.5 ").unwrap(), 2.5);
/// assert!(parse_amount("abc").is_err());
/// assert!(parse_amount("0").is_err());
/// ```
pub fn parse_amount(text: &str) -> Result<f64, ConverterError> {
    let invalid = || ConverterError::InvalidAmount(text.to_string());

    let value: f64 = text.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid());
    }
    Ok(value)
}
