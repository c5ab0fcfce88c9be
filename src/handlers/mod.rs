//! Event Handlers
//!
//! This module contains handlers for the two kinds of session events:
//! - keyboard: User keyboard input (drives the screen state machine)
//! - conversion: Responses from the background conversion service
//!
//! Handlers are pure functions over the Model; any I/O they need is returned
//! as a `Command` for the runtime to execute.

pub mod conversion;
pub mod keyboard;

pub use conversion::handle_conversion_response;
pub use keyboard::handle_key;

use crate::messages::{Command, Msg};
use crate::model::Model;

/// Single update step: apply one message to the model
pub fn update(model: &mut Model, msg: Msg) -> Option<Command> {
    match msg {
        Msg::KeyPress(key) => handle_key(model, key),
        Msg::ConversionFinished(response) => {
            handle_conversion_response(model, response);
            None
        }
    }
}
