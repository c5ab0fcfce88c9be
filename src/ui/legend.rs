use ratatui::text::{Line, Span};

use super::styles;
use crate::model::Screen;

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(screen: Screen) -> Vec<Span<'static>> {
    let bindings: &[(&'static str, &'static str)] = match screen {
        Screen::SelectFrom => &[
            ("↑/↓", "Navigate"),
            ("Enter", "Select"),
            ("Type", "Filter"),
            ("q", "Quit"),
        ],
        Screen::SelectTo => &[
            ("↑/↓", "Navigate"),
            ("Enter", "Select"),
            ("Type", "Filter"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ],
        Screen::EnterAmount => &[("Enter", "Convert"), ("Esc", "Back"), ("q", "Quit")],
        Screen::ShowResult | Screen::ShowError => {
            &[("Enter/Esc", "New conversion"), ("q", "Quit")]
        }
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", styles::help()));
        }
        spans.push(Span::styled(*key, styles::hotkey()));
        spans.push(Span::styled(format!(": {}", action), styles::help()));
    }
    spans
}

/// Context-sensitive help footer
pub fn build_help_line(screen: Screen) -> Line<'static> {
    Line::from(build_hotkey_spans(screen))
}
