//! Selected-currency summary and amount entry
//!
//! Renders the `From:`/`To:` lines and the amount input echo.

use ratatui::text::{Line, Span};

use super::styles;
use crate::catalog::display_name;
use crate::model::TextInput;

/// `From: USD US Dollar` style line
pub fn build_selected_line(label: &str, code: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{} ", label)),
        Span::styled(code.to_string(), styles::selected()),
        Span::raw(format!(" {}", display_name(code))),
    ])
}

/// Amount prompt, input echo with cursor, and the in-flight indicator
pub fn build_amount_lines(input: &TextInput, converting: bool) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Enter amount:")];

    let mut spans = vec![Span::raw("> ")];
    if input.is_empty() {
        spans.push(Span::styled("█", styles::cursor()));
        spans.push(Span::styled(input.placeholder, styles::placeholder()));
    } else {
        let (before, after) = input.split_at_cursor();
        spans.push(Span::raw(before));
        spans.push(Span::styled("█", styles::cursor()));
        spans.push(Span::raw(after));
    }
    lines.push(Line::from(spans));

    if converting {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Converting...", styles::help())));
    }

    lines
}
