//! Conversion Response Handler
//!
//! Applies responses from the background conversion service. Only the
//! response for the latest pending request may change the screen.

use crate::model::Model;
use crate::services::ConversionResponse;

/// Handle a conversion response
///
/// Returns true if the response was applied, false if it was stale.
pub fn handle_conversion_response(model: &mut Model, response: ConversionResponse) -> bool {
    if !model.conversion.complete(response.seq) {
        tracing::warn!(
            seq = response.seq,
            pending = ?model.conversion.pending(),
            "Dropping stale conversion response"
        );
        return false;
    }

    match response.result {
        Ok(result) => {
            tracing::debug!(
                seq = response.seq,
                "Converted {} {} -> {} {}",
                result.amount,
                result.from_code,
                result.converted,
                result.to_code
            );
            model.show_result(result);
        }
        Err(e) => {
            tracing::debug!(seq = response.seq, "Showing conversion error: {}", e);
            model.show_error(e);
        }
    }
    true
}
