use ratatui::{
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::{layout, legend, outcome, selector, styles, summary};
use crate::model::{Model, Screen};

/// Build every line of the current screen
///
/// Pure: reads the model, never mutates it.
pub fn build_lines(model: &Model) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("  Currency Converter  ", styles::title())),
        Line::default(),
    ];

    match model.screen {
        Screen::SelectFrom => {
            lines.extend(selector::build_selector_lines(
                model.screen.selector_prompt(),
                &model.selector,
            ));
        }
        Screen::SelectTo => {
            if let Some(from) = &model.from_code {
                lines.push(summary::build_selected_line("From:", from));
                lines.push(Line::default());
            }
            lines.extend(selector::build_selector_lines(
                model.screen.selector_prompt(),
                &model.selector,
            ));
        }
        Screen::EnterAmount => {
            if let Some(from) = &model.from_code {
                lines.push(summary::build_selected_line("From:", from));
            }
            if let Some(to) = &model.to_code {
                lines.push(summary::build_selected_line("To:  ", to));
            }
            lines.push(Line::default());
            lines.extend(summary::build_amount_lines(
                &model.amount_input,
                model.is_converting(),
            ));
        }
        Screen::ShowResult => match &model.last_result {
            Some(result) => lines.extend(outcome::build_result_lines(result)),
            None => lines.extend(outcome::build_error_lines(model.last_error.as_ref())),
        },
        Screen::ShowError => {
            lines.extend(outcome::build_error_lines(model.last_error.as_ref()));
        }
    }

    lines.push(Line::default());
    lines.push(legend::build_help_line(model.screen));
    lines
}

/// Plain-text rendering of the current screen, one entry per line
pub fn screen_text(model: &Model) -> Vec<String> {
    build_lines(model).iter().map(|l| l.to_string()).collect()
}

/// Main render function - draws the current screen inside a rounded box
pub fn render(f: &mut Frame, model: &Model) {
    let lines = build_lines(model);
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let content_width = u16::try_from(content_width).unwrap_or(u16::MAX);
    let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

    let layout_info = layout::calculate_layout(f.area(), content_width, content_height);
    if layout_info.box_area.width == 0 || layout_info.box_area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border());

    f.render_widget(Clear, layout_info.box_area);
    f.render_widget(block, layout_info.box_area);
    f.render_widget(Paragraph::new(lines), layout_info.content_area);
}
