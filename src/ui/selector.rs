//! Currency Selector UI
//!
//! Builds the prompt, active filter and the windowed currency list.

use ratatui::text::{Line, Span};

use super::styles;
use crate::catalog::display_name;
use crate::logic::formatting::format_currency_label;
use crate::logic::pagination::{visible_window, MAX_VISIBLE};
use crate::model::SelectorModel;

/// Marker in front of the row under the cursor
pub const CURSOR_MARKER: &str = "▶ ";

/// Build selector lines
///
/// # Arguments
/// - `prompt`: Line shown above the list
/// - `selector`: Filter text, filtered list and cursor
pub fn build_selector_lines(prompt: &str, selector: &SelectorModel) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(prompt.to_string())];

    if !selector.filter_text.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("Filter: "),
            Span::styled(selector.filter_text.clone(), styles::selected()),
        ]));
    }
    lines.push(Line::default());

    let window = visible_window(selector.cursor, selector.filtered.len(), MAX_VISIBLE);
    for idx in window {
        let code = &selector.filtered[idx];
        let label = format_currency_label(code, display_name(code));

        let line = if idx == selector.cursor {
            Line::from(Span::styled(
                format!("{}{}", CURSOR_MARKER, label),
                styles::selected(),
            ))
        } else {
            Line::from(Span::styled(format!("  {}", label), styles::normal()))
        };
        lines.push(line);
    }

    lines
}
