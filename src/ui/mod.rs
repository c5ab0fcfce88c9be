// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - render: Builds the screen as styled lines and draws them in a box
// - layout: Sizes and positions the main box
// - selector: Currency list with filter and cursor marker
// - summary: Selected-currency lines and the amount input echo
// - outcome: Result and error screens
// - legend: Context-sensitive help footer
// - styles: Shared colors

pub mod layout;
pub mod legend;
pub mod outcome;
pub mod render;
pub mod selector;
pub mod styles;
pub mod summary;

// Re-export main render function for convenience
pub use render::{build_lines, render, screen_text};
