//! Filter Logic
//!
//! Pure functions for narrowing the currency list while the user types.

/// Codes from `catalog` that start with `prefix`, in catalog order
///
/// Matching is case-sensitive; callers fold typed characters to uppercase
/// before they reach the filter. An empty prefix matches everything.
///
/// # Examples
/// ```
/// use currency_converter::logic::filter::prefix_matches;
///
/// let catalog = ["USD", "EUR", "GBP", "UAH"];
/// assert_eq!(prefix_matches(&catalog, "U"), vec!["USD", "UAH"]);
/// assert_eq!(prefix_matches(&catalog, ""), vec!["USD", "EUR", "GBP", "UAH"]);
/// assert!(prefix_matches(&catalog, "X").is_empty());
/// ```
pub fn prefix_matches<S: AsRef<str>>(catalog: &[S], prefix: &str) -> Vec<String> {
    catalog
        .iter()
        .map(AsRef::as_ref)
        .filter(|code| code.starts_with(prefix))
        .map(str::to_string)
        .collect()
}

/// Recompute the visible list for `filter_text`
///
/// An empty filter restores the whole catalog. A filter with no matches
/// keeps `current` as it is, so the list on screen never goes blank.
pub fn recompute<S: AsRef<str>>(catalog: &[S], filter_text: &str, current: &[String]) -> Vec<String> {
    if filter_text.is_empty() {
        return prefix_matches(catalog, "");
    }

    let matches = prefix_matches(catalog, filter_text);
    if matches.is_empty() {
        current.to_vec()
    } else {
        matches
    }
}

/// Map a typed character to a filter character
///
/// Only ASCII letters are accepted; they are folded to uppercase.
///
/// # Examples
/// ```
/// use currency_converter::logic::filter::filter_char;
///
/// assert_eq!(filter_char('e'), Some('E'));
/// assert_eq!(filter_char('G'), Some('G'));
/// assert_eq!(filter_char('4'), None);
/// ```
pub fn filter_char(c: char) -> Option<char> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase())
    } else {
        None
    }
}
