//! Pagination logic
//!
//! Computes which slice of a long list is visible around the cursor.

/// Maximum number of list rows rendered at once
pub const MAX_VISIBLE: usize = 8;

/// Visible `start..end` range for a list of `len` items
///
/// The window holds exactly `min(max_visible, len)` rows. It is centred on the
/// cursor where possible and clamped so it never runs past either end.
///
/// # Examples
/// ```
/// use currency_converter::logic::pagination::visible_window;
///
/// assert_eq!(visible_window(0, 5, 8), 0..5);   // short list, all visible
/// assert_eq!(visible_window(0, 15, 8), 0..8);  // top
/// assert_eq!(visible_window(7, 15, 8), 3..11); // centred
/// assert_eq!(visible_window(14, 15, 8), 7..15); // bottom
/// ```
pub fn visible_window(cursor: usize, len: usize, max_visible: usize) -> std::ops::Range<usize> {
    if len <= max_visible {
        return 0..len;
    }

    let max_start = len - max_visible;
    let start = cursor.saturating_sub(max_visible / 2).min(max_start);
    start..start + max_visible
}
