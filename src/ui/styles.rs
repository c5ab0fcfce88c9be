//! Shared colors and text styles

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0x7D, 0x56, 0xF4);

pub fn title() -> Style {
    Style::default()
        .fg(Color::Rgb(0x01, 0xEE, 0xFF))
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn selected() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn normal() -> Style {
    Style::default().fg(Color::Rgb(0x19, 0xEF, 0xE8))
}

pub fn result() -> Style {
    Style::default()
        .fg(Color::Rgb(0x04, 0xB5, 0x75))
        .add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default()
        .fg(Color::Rgb(0xFF, 0x00, 0x00))
        .add_modifier(Modifier::BOLD)
}

pub fn help() -> Style {
    Style::default().fg(Color::Rgb(0x62, 0x62, 0x62))
}

pub fn hotkey() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn placeholder() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn cursor() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK)
}

pub fn border() -> Style {
    Style::default().fg(ACCENT)
}
