//! Message types for the Elm Architecture pattern
//!
//! Messages flow into `handlers::update`, which mutates the Model and may
//! hand back a `Command` for the runtime to execute.
//!
//! Message sources:
//! - User input (keyboard events)
//! - Conversion responses (from the background conversion service)

use crossterm::event::KeyEvent;

use crate::services::{ConversionRequest, ConversionResponse};

/// Unified message type for all session events
#[derive(Debug)]
pub enum Msg {
    /// User pressed a key
    KeyPress(KeyEvent),

    /// The conversion service delivered a response
    ConversionFinished(ConversionResponse),
}

/// Side effects requested by the update step
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a conversion in the background
    Convert(ConversionRequest),
}
