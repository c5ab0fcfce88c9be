use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::{ConversionResult, RateProvider};
use crate::errors::ConverterError;

/// A conversion to run in the background
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// Sequence number from `ConversionTracker::begin`
    pub seq: u64,
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Exactly one response is sent per request
#[derive(Debug, Clone)]
pub struct ConversionResponse {
    pub seq: u64,
    pub result: Result<ConversionResult, ConverterError>,
}

/// Conversion worker: every request runs as its own task, no cancellation
pub struct ConversionService {
    provider: Arc<dyn RateProvider>,
    response_tx: mpsc::UnboundedSender<ConversionResponse>,
}

impl ConversionService {
    fn new(
        provider: Arc<dyn RateProvider>,
        response_tx: mpsc::UnboundedSender<ConversionResponse>,
    ) -> Self {
        Self {
            provider,
            response_tx,
        }
    }

    fn dispatch(&self, request: ConversionRequest) {
        tracing::info!(
            seq = request.seq,
            "Converting {} {} -> {}",
            request.amount,
            request.from,
            request.to
        );

        let provider = Arc::clone(&self.provider);
        let response_tx = self.response_tx.clone();

        tokio::spawn(async move {
            let seq = request.seq;
            let result = provider
                .convert(&request.from, &request.to, request.amount)
                .await;

            if let Err(e) = &result {
                tracing::warn!(seq, "Conversion failed: {}", e);
            }

            // Receiver gone means the session ended; nothing left to notify
            if response_tx.send(ConversionResponse { seq, result }).is_err() {
                tracing::debug!(seq, "Session closed before conversion finished");
            }
        });
    }
}

/// Spawn the conversion service worker
///
/// The worker stops once the request sender is dropped; tasks already in
/// flight still deliver their responses.
pub fn spawn_conversion_service(
    provider: Arc<dyn RateProvider>,
) -> (
    mpsc::UnboundedSender<ConversionRequest>,
    mpsc::UnboundedReceiver<ConversionResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ConversionRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ConversionResponse>();

    tokio::spawn(async move {
        let service = ConversionService::new(provider, response_tx);

        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }

        tracing::debug!("Conversion service stopped");
    });

    (request_tx, response_rx)
}
