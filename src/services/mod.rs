//! External Services
//!
//! This module contains services that interact with external systems:
//! - conversion: Background conversion worker over a `RateProvider`

pub mod conversion;

// Re-export commonly used types for convenience
pub use conversion::{spawn_conversion_service, ConversionRequest, ConversionResponse};
