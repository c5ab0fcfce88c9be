//! Selector Model
//!
//! State of the currency list shown on the `SelectFrom` and `SelectTo`
//! screens: the live filter, the filtered list and the cursor.

use crate::logic::{filter, navigation};

#[derive(Clone, Debug, PartialEq)]
pub struct SelectorModel {
    /// Full catalog, in display order
    catalog: Vec<String>,

    /// Uppercase prefix typed so far
    pub filter_text: String,

    /// Codes currently listed (never emptied by a zero-match filter)
    pub filtered: Vec<String>,

    /// Index into `filtered`
    pub cursor: usize,
}

impl SelectorModel {
    pub fn new<S: AsRef<str>>(catalog: &[S]) -> Self {
        let catalog: Vec<String> = catalog.iter().map(|c| c.as_ref().to_string()).collect();
        Self {
            filtered: catalog.clone(),
            catalog,
            filter_text: String::new(),
            cursor: 0,
        }
    }

    /// Code under the cursor
    pub fn selected(&self) -> Option<&str> {
        self.filtered.get(self.cursor).map(String::as_str)
    }

    pub fn move_up(&mut self) {
        self.cursor = navigation::prev_index(self.cursor, self.filtered.len());
    }

    pub fn move_down(&mut self) {
        self.cursor = navigation::next_index(self.cursor, self.filtered.len());
    }

    /// Append a typed character to the filter
    ///
    /// Returns false if the character is not a filter character.
    pub fn push_filter_char(&mut self, c: char) -> bool {
        match filter::filter_char(c) {
            Some(upper) => {
                self.filter_text.push(upper);
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Drop the last filter character; no-op on an empty filter
    pub fn pop_filter_char(&mut self) {
        if self.filter_text.pop().is_some() {
            self.recompute();
        }
    }

    /// Clear the filter and show the whole catalog with the cursor at the top
    pub fn reset(&mut self) {
        self.filter_text.clear();
        self.filtered = self.catalog.clone();
        self.cursor = 0;
    }

    /// Reset, then place the cursor on `code` if it is in the catalog
    pub fn reset_to(&mut self, code: &str) {
        self.reset();
        if let Some(idx) = self.filtered.iter().position(|c| c == code) {
            self.cursor = idx;
        }
    }

    fn recompute(&mut self) {
        self.filtered = filter::recompute(&self.catalog, &self.filter_text, &self.filtered);
        self.cursor = 0;
    }
}
