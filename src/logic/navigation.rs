//! Navigation selection logic
//!
//! Pure functions for moving a list cursor. Movement is clamped at both ends;
//! there is no wraparound.

/// Move the cursor one row down, stopping at the last item
///
/// # Arguments
/// * `current` - Current cursor index
/// * `list_len` - Total number of items in the list
///
/// # Returns
/// The new cursor index (0 for an empty list)
///
/// # Examples
/// ```
/// use currency_converter::logic::navigation::next_index;
///
/// assert_eq!(next_index(0, 0), 0);
/// assert_eq!(next_index(0, 3), 1);
/// assert_eq!(next_index(2, 3), 2); // stays on last item
/// ```
pub fn next_index(current: usize, list_len: usize) -> usize {
    if list_len == 0 {
        return 0;
    }
    (current + 1).min(list_len - 1)
}

/// Move the cursor one row up, stopping at the first item
///
/// # Examples
/// ```
/// use currency_converter::logic::navigation::prev_index;
///
/// assert_eq!(prev_index(2, 3), 1);
/// assert_eq!(prev_index(0, 3), 0); // stays on first item
/// ```
pub fn prev_index(current: usize, list_len: usize) -> usize {
    if list_len == 0 {
        return 0;
    }
    current.saturating_sub(1).min(list_len - 1)
}
