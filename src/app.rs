//! Application runtime
//!
//! Owns the session Model and the channels to the conversion service, and
//! turns `Command`s returned by the handlers into service requests.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

use crate::api::RateProvider;
use crate::handlers;
use crate::messages::{Command, Msg};
use crate::model::Model;
use crate::services::{self, ConversionRequest, ConversionResponse};

pub struct App {
    pub model: Model,

    request_tx: mpsc::UnboundedSender<ConversionRequest>,
    response_rx: mpsc::UnboundedReceiver<ConversionResponse>,
}

impl App {
    /// Start the conversion service and create a fresh session
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        let (request_tx, response_rx) = services::spawn_conversion_service(provider);
        Self {
            model: Model::new(),
            request_tx,
            response_rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.model.should_quit
    }

    /// Feed one message through the update step and run its command
    pub fn update(&mut self, msg: Msg) {
        if let Some(command) = handlers::update(&mut self.model, msg) {
            self.execute(command);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.update(Msg::KeyPress(key));
    }

    /// Apply every response that has already arrived, without waiting
    ///
    /// Returns the number of responses processed.
    pub fn drain_responses(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(response) = self.response_rx.try_recv() {
            self.update(Msg::ConversionFinished(response));
            processed += 1;
        }
        processed
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Convert(request) => {
                let seq = request.seq;
                if self.request_tx.send(request).is_err() {
                    tracing::error!(seq, "Conversion service is not running");
                    self.model.conversion.abandon();
                    self.model.show_error(crate::errors::ConverterError::Network(
                        "conversion service stopped".to_string(),
                    ));
                }
            }
        }
    }
}
