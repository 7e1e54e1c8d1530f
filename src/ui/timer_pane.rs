use crate::app::AppState;
use crate::messages;
use crate::timer::RunState;
use crate::ui::styles::{
    countdown_style, dim_style, error_style, grace_style, success_style, text_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the fullscreen timer. The whole content area belongs to the run
/// while it is alive, mirroring the fullscreen cover in the mobile layout.
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(active) = app.active_timer.as_ref() else {
        return;
    };

    // Abandoned runs show the disappointment screen until acknowledged
    if let Some(message) = active.disappointment {
        render_disappointment(f, app, area, message);
        return;
    }

    let theme = app.settings.theme;
    let controller = &active.controller;
    let mut lines: Vec<Line> = vec![Line::raw("")];

    match controller.state() {
        RunState::AwaitingStart => {
            lines.push(Line::styled("Rotate your device", title_style()));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "Rotate into landscape to start the timer",
                dim_style(),
            ));
            lines.push(Line::raw(""));
            lines.push(Line::styled("      ┌──────────────┐", dim_style()));
            lines.push(Line::styled("      │              │", dim_style()));
            lines.push(Line::styled("      └──────────────┘", dim_style()));
            lines.push(Line::raw(""));
            lines.push(Line::styled("(press l to rotate)", dim_style()));
        }
        RunState::Running => {
            lines.push(Line::styled(active.todo_title.clone(), title_style()));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                format_countdown(controller.remaining_seconds()),
                countdown_style(),
            ));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "Keep in landscape to continue",
                dim_style(),
            ));
        }
        RunState::PortraitGrace => {
            lines.push(Line::styled(active.todo_title.clone(), title_style()));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                format_countdown(controller.remaining_seconds()),
                text_style(theme),
            ));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                format!(
                    "Paused — return to landscape within {}s",
                    controller.grace_remaining_seconds()
                ),
                grace_style(),
            ));
        }
        RunState::Finished => {
            lines.push(Line::styled("Done!", success_style()));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "Rotate back to portrait to mark the task as completed",
                text_style(theme),
            ));
            lines.push(Line::raw(""));
            lines.push(Line::styled("(press p to rotate)", dim_style()));
        }
        // Completed tears the screen down immediately; Abandoned is the
        // disappointment branch above; Closed never renders
        RunState::Completed | RunState::Abandoned | RunState::Closed => {}
    }

    let paragraph = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Commitment Timer "));

    f.render_widget(paragraph, area);
}

fn render_disappointment(f: &mut Frame, app: &AppState, area: Rect, message: &str) {
    let theme = app.settings.theme;
    let lines = vec![
        Line::raw(""),
        Line::styled("(－‸ლ)", error_style()),
        Line::raw(""),
        Line::styled(messages::DISAPPOINTMENT_TITLE, error_style()),
        Line::raw(""),
        Line::styled(message.to_string(), text_style(theme)),
        Line::raw(""),
        Line::styled("[Enter] OK", dim_style()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, area);
}

/// Format remaining seconds as MM:SS
pub fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(59), "00:59");
        assert_eq!(format_countdown(60), "01:00");
        assert_eq!(format_countdown(605), "10:05");
        assert_eq!(format_countdown(3599), "59:59");
    }
}
