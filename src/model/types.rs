//! Shared types for the Model

/// Which screen the session is on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    SelectFrom,
    SelectTo,
    EnterAmount,
    ShowResult,
    ShowError,
}

impl Screen {
    /// Screens that show the currency selector
    pub fn is_selecting(&self) -> bool {
        matches!(self, Screen::SelectFrom | Screen::SelectTo)
    }

    /// Terminal screens that lead back to `SelectFrom`
    pub fn is_outcome(&self) -> bool {
        matches!(self, Screen::ShowResult | Screen::ShowError)
    }

    /// Prompt shown above the currency list
    pub fn selector_prompt(&self) -> &'static str {
        match self {
            Screen::SelectTo => "Select target currency:",
            _ => "Select source currency:",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_groups() {
        assert!(Screen::SelectFrom.is_selecting());
        assert!(Screen::SelectTo.is_selecting());
        assert!(!Screen::EnterAmount.is_selecting());
        assert!(Screen::ShowResult.is_outcome());
        assert!(Screen::ShowError.is_outcome());
        assert!(!Screen::EnterAmount.is_outcome());
    }
}
