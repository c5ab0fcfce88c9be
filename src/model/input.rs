//! Amount text input
//!
//! Single-line text field used on the `EnterAmount` screen. Positions are
//! counted in characters, not bytes.

pub const AMOUNT_CHAR_LIMIT: usize = 20;

pub const AMOUNT_PLACEHOLDER: &str = "Enter amount";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInput {
    value: Vec<char>,
    cursor: usize,
    char_limit: usize,
    pub placeholder: &'static str,
}

impl TextInput {
    pub fn new(char_limit: usize, placeholder: &'static str) -> Self {
        Self {
            value: Vec::new(),
            cursor: 0,
            char_limit,
            placeholder,
        }
    }

    pub fn amount() -> Self {
        Self::new(AMOUNT_CHAR_LIMIT, AMOUNT_PLACEHOLDER)
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert at the cursor; control characters and input past the limit are dropped
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_control() || self.value.len() >= self.char_limit {
            return false;
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.value.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Text before and after the cursor, for rendering
    pub fn split_at_cursor(&self) -> (String, String) {
        (
            self.value[..self.cursor].iter().collect(),
            self.value[self.cursor..].iter().collect(),
        )
    }
}
