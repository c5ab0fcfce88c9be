//! Result and error screens

use ratatui::text::{Line, Span};

use super::styles;
use crate::api::ConversionResult;
use crate::catalog::display_name;
use crate::errors::ConverterError;
use crate::logic::formatting::{format_money, format_rate, format_timestamp};

pub fn build_result_lines(result: &ConversionResult) -> Vec<Line<'static>> {
    let from = format_money(result.amount, &result.from_code);
    let to = format_money(result.converted, &result.to_code);

    let mut lines = vec![
        Line::from(Span::styled("Conversion Result", styles::result())),
        Line::default(),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(from, styles::selected()),
            Span::raw(" -> "),
            Span::styled(to, styles::selected()),
        ]),
    ];

    let from_name = display_name(&result.from_code);
    let to_name = display_name(&result.to_code);
    if !from_name.is_empty() || !to_name.is_empty() {
        lines.push(Line::from(format!(
            "  {} -> {}",
            name_or_code(from_name, &result.from_code),
            name_or_code(to_name, &result.to_code)
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(format!(
        "  {}",
        format_rate(&result.from_code, result.rate, &result.to_code)
    )));
    lines.push(Line::from(format!(
        "  Last Updated: {}",
        format_timestamp(&result.last_updated)
    )));
    lines.push(Line::default());
    lines.push(Line::from("Press Enter or Esc for new conversion"));

    lines
}

pub fn build_error_lines(error: Option<&ConverterError>) -> Vec<Line<'static>> {
    let message = error
        .map(|e| e.to_string())
        .unwrap_or_else(|| "unknown error".to_string());

    let mut lines: Vec<Line<'static>> = message
        .lines()
        .enumerate()
        .map(|(i, part)| {
            let text = if i == 0 {
                format!("Error: {}", part)
            } else {
                part.to_string()
            };
            Line::from(Span::styled(text, styles::error()))
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::from("Press Enter or Esc to try again"));
    lines
}

fn name_or_code<'a>(name: &'a str, code: &'a str) -> &'a str {
    if name.is_empty() {
        code
    } else {
        name
    }
}
