//! Currency Catalog
//!
//! Static currency data used for presentation and filtering. The tables are
//! compile-time constants and are never written.

/// Codes offered by the interactive selector, in display order
const COMMON_CODES: &[&str] = &[
    "USD", "EUR", "GBP", "JPY", "TRY", "CHF", "CAD", "AUD", "CNY", "INR", "KRW", "MXN", "BRL",
    "RUB", "ZAR",
];

/// Code -> display name
const CURRENCY_NAMES: &[(&str, &str)] = &[
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "British Pound"),
    ("JPY", "Japanese Yen"),
    ("TRY", "Turkish Lira"),
    ("CHF", "Swiss Franc"),
    ("CAD", "Canadian Dollar"),
    ("AUD", "Australian Dollar"),
    ("CNY", "Chinese Yuan"),
    ("INR", "Indian Rupee"),
    ("KRW", "South Korean Won"),
    ("MXN", "Mexican Peso"),
    ("BRL", "Brazilian Real"),
    ("RUB", "Russian Ruble"),
    ("ZAR", "South African Rand"),
    ("AED", "UAE Dirham"),
    ("SAR", "Saudi Riyal"),
    ("SGD", "Singapore Dollar"),
    ("HKD", "Hong Kong Dollar"),
    ("NOK", "Norwegian Krone"),
    ("SEK", "Swedish Krona"),
    ("DKK", "Danish Krone"),
    ("PLN", "Polish Zloty"),
    ("THB", "Thai Baht"),
    ("IDR", "Indonesian Rupiah"),
    ("MYR", "Malaysian Ringgit"),
    ("PHP", "Philippine Peso"),
    ("CZK", "Czech Koruna"),
    ("ILS", "Israeli Shekel"),
    ("CLP", "Chilean Peso"),
    ("PKR", "Pakistani Rupee"),
    ("EGP", "Egyptian Pound"),
    ("TWD", "Taiwan Dollar"),
    ("VND", "Vietnamese Dong"),
    ("BDT", "Bangladeshi Taka"),
    ("ARS", "Argentine Peso"),
    ("COP", "Colombian Peso"),
    ("PEN", "Peruvian Sol"),
    ("UAH", "Ukrainian Hryvnia"),
    ("KZT", "Kazakhstani Tenge"),
    ("QAR", "Qatari Riyal"),
    ("KWD", "Kuwaiti Dinar"),
    ("BHD", "Bahraini Dinar"),
    ("OMR", "Omani Rial"),
];

/// Widely used currency codes, in the order the selector shows them
///
/// # Examples
/// ```
/// use currency_converter::catalog::common_codes;
///
/// assert_eq!(common_codes().first(), Some(&"USD"));
/// assert_eq!(common_codes().len(), 15);
/// ```
pub fn common_codes() -> &'static [&'static str] {
    COMMON_CODES
}

/// Human-readable name for a currency code
///
/// Unknown codes yield an empty string rather than an error so callers can
/// render the bare code.
///
/// # Examples
/// ```
/// use currency_converter::catalog::display_name;
///
/// assert_eq!(display_name("EUR"), "Euro");
/// assert_eq!(display_name("XYZ"), "");
/// ```
pub fn display_name(code: &str) -> &'static str {
    CURRENCY_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or("")
}
