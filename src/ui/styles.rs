use crate::persistence::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Whether to render for a dark background. `System` assumes the common
/// dark terminal.
fn dark(theme: Theme) -> bool {
    !matches!(theme, Theme::Light)
}

/// Default text style
pub fn text_style(theme: Theme) -> Style {
    if dark(theme) {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Black)
    }
}

/// Secondary/dimmed text
pub fn dim_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Completed todo style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Overdue marker style
pub fn overdue_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Category badge style
pub fn category_style() -> Style {
    Style::default().fg(Color::Blue)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// The big countdown readout
pub fn countdown_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Grace-window warning readout
pub fn grace_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Success headline (finished countdown, streaks)
pub fn success_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Disappointment headline
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Calendar day with at least one completion
pub fn streak_day_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
}

/// Active input field in a form
pub fn active_field_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}
