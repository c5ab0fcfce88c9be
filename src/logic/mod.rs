//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - amount: Amount text validation
//! - filter: Prefix filtering of the currency list
//! - formatting: Money, rate and timestamp formatting
//! - navigation: Clamped cursor movement
//! - pagination: Visible window over long lists

pub mod amount;
pub mod filter;
pub mod formatting;
pub mod navigation;
pub mod pagination;
