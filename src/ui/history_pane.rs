use crate::app::AppState;
use crate::ui::styles::{border_style, dim_style, done_style, text_style, title_style};
use chrono::{Local, NaiveDate};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render completed todos grouped by day, newest day first
pub fn render_history_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let today = Local::now().date_naive();
    let history = app.store.history(today);
    let theme = app.settings.theme;

    let mut lines: Vec<Line> = Vec::new();

    if history.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled("  Nothing here yet", dim_style()));
        lines.push(Line::styled(
            "  Completed todos from past days will show up here",
            dim_style(),
        ));
    }

    for (day, todos) in history.iter().rev() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(format_day(*day), title_style()));
        for todo in todos {
            let mut spans = vec![
                Span::styled("   ✓ ", done_style()),
                Span::styled(todo.title.clone(), text_style(theme)),
            ];
            if let Some(at) = todo.completed_at {
                spans.push(Span::styled(
                    format!("  {}", at.format("%H:%M")),
                    dim_style(),
                ));
            }
            if todo.completed_with_timer {
                spans.push(Span::styled("  ⏱".to_string(), dim_style()));
            }
            lines.push(Line::from(spans));
        }
    }

    // Apply scroll by dropping leading lines
    let visible: Vec<Line> = lines.into_iter().skip(app.history_scroll).collect();

    let paragraph = Paragraph::new(visible).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" History ", title_style())),
    );

    f.render_widget(paragraph, area);
}

fn format_day(day: NaiveDate) -> String {
    format!("  {}", day.format("%A, %b %d %Y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(format_day(day), "  Wednesday, Aug 05 2026");
    }
}
