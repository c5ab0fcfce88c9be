//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state of an interactive session.
//! The Model is organized into focused sub-models:
//!
//! - **SelectorModel**: filter text, filtered list, cursor
//! - **TextInput**: amount entry field
//! - **ConversionTracker**: sequence numbers of in-flight requests
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the App runtime
//! - Mutated only by handlers (key presses and conversion responses)

pub mod conversion;
pub mod input;
pub mod selector;
pub mod types;

pub use conversion::ConversionTracker;
pub use input::TextInput;
pub use selector::SelectorModel;
pub use types::Screen;

use crate::api::ConversionResult;
use crate::catalog;
use crate::errors::ConverterError;

/// Root session model
#[derive(Clone, Debug)]
pub struct Model {
    /// Current screen
    pub screen: Screen,

    /// Currency list state for the two selection screens
    pub selector: SelectorModel,

    /// Committed source currency
    pub from_code: Option<String>,

    /// Committed target currency
    pub to_code: Option<String>,

    /// Amount field on the `EnterAmount` screen
    pub amount_input: TextInput,

    /// Most recent successful conversion
    pub last_result: Option<ConversionResult>,

    /// Most recent error shown on `ShowError`
    pub last_error: Option<ConverterError>,

    /// In-flight request bookkeeping
    pub conversion: ConversionTracker,

    /// Whether the session should end
    pub should_quit: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Create a session over the common currency catalog
    pub fn new() -> Self {
        Self::with_catalog(catalog::common_codes())
    }

    /// Create a session over a custom catalog
    pub fn with_catalog<S: AsRef<str>>(codes: &[S]) -> Self {
        Self {
            screen: Screen::SelectFrom,
            selector: SelectorModel::new(codes),
            from_code: None,
            to_code: None,
            amount_input: TextInput::amount(),
            last_result: None,
            last_error: None,
            conversion: ConversionTracker::new(),
            should_quit: false,
        }
    }

    /// Whether a conversion response is still awaited
    pub fn is_converting(&self) -> bool {
        self.conversion.is_pending()
    }

    /// Go back to `SelectFrom` with a fresh list
    pub fn restart(&mut self) {
        self.screen = Screen::SelectFrom;
        self.selector.reset();
        self.conversion.abandon();
    }

    pub fn show_result(&mut self, result: ConversionResult) {
        self.last_result = Some(result);
        self.screen = Screen::ShowResult;
    }

    pub fn show_error(&mut self, error: ConverterError) {
        self.last_error = Some(error);
        self.screen = Screen::ShowError;
    }
}
