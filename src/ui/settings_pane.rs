use crate::app::AppState;
use crate::ui::styles::{border_style, dim_style, selected_style, text_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the settings screen
pub fn render_settings_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.settings.theme;

    let rows = [
        format!("Theme:                {}", app.settings.theme.name()),
        format!(
            "Notifications:        {}",
            if app.settings.notifications_enabled {
                "on"
            } else {
                "off"
            }
        ),
        format!(
            "Default timer:        {} min",
            app.settings.default_timer_minutes
        ),
        "Export data...".to_string(),
    ];

    let mut lines: Vec<Line> = vec![Line::raw("")];
    for (index, row) in rows.iter().enumerate() {
        let style = if index == app.settings_selected {
            selected_style()
        } else {
            text_style(theme)
        };
        lines.push(Line::styled(format!("  {}", row), style));
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled(
        "  Import runs from the command line: doable import <file>",
        dim_style(),
    ));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Settings ", title_style())),
    );

    f.render_widget(paragraph, area);
}
