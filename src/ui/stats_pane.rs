use crate::app::AppState;
use crate::report::{calculate_summary, days_in_month, first_weekday, month_completion_days};
use crate::ui::styles::{
    border_style, dim_style, streak_day_style, success_style, text_style, title_style,
};
use chrono::{Datelike, Local};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render the statistics screen: summary numbers plus a completion calendar
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.settings.theme;
    let stats = calculate_summary(&app.store, Local::now());

    let mut lines: Vec<Line> = vec![Line::raw("")];

    lines.push(Line::from(vec![
        Span::styled("  Current streak: ", text_style(theme)),
        Span::styled(
            format!("{} day(s)", stats.current_streak),
            success_style(),
        ),
        Span::styled(
            format!("   (longest: {})", stats.longest_streak),
            dim_style(),
        ),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!(
            "  Completed: {} total, {} today",
            stats.completed_count, stats.completed_today
        ),
        text_style(theme),
    ));
    lines.push(Line::styled(
        format!(
            "  With timer: {}   without: {}",
            stats.timer_completions, stats.shortcut_completions
        ),
        text_style(theme),
    ));
    lines.push(Line::styled(
        format!("  Focus time: {}", format_focus(stats.focus_seconds)),
        text_style(theme),
    ));
    lines.push(Line::styled(
        format!(
            "  Open: {}   overdue: {}   total: {}",
            stats.open_count, stats.overdue_count, stats.total_todos
        ),
        text_style(theme),
    ));

    // Calendar
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!(
            "  ◀ {} {} ▶",
            MONTH_NAMES[(app.stats_month as usize - 1).min(11)],
            app.stats_year
        ),
        title_style(),
    ));
    lines.push(Line::styled("  Mo Tu We Th Fr Sa Su", dim_style()));
    lines.extend(calendar_lines(app));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Statistics ", title_style())),
    );

    f.render_widget(paragraph, area);
}

/// Build the week rows of the calendar, marking completion days
fn calendar_lines(app: &AppState) -> Vec<Line<'static>> {
    let theme = app.settings.theme;
    let marked = month_completion_days(&app.store, app.stats_year, app.stats_month);
    let total_days = days_in_month(app.stats_year, app.stats_month);
    let lead = first_weekday(app.stats_year, app.stats_month);
    let today = Local::now().date_naive();
    let showing_current_month =
        today.year() == app.stats_year && today.month() == app.stats_month;

    let mut lines = Vec::new();
    let mut spans: Vec<Span> = vec![Span::raw("  ")];
    for _ in 0..lead {
        spans.push(Span::raw("   "));
    }

    let mut weekday = lead;
    for day in 1..=total_days {
        let cell = format!("{:>2}", day);
        let span = if marked.contains(&day) {
            Span::styled(cell, streak_day_style())
        } else if showing_current_month && day == today.day() {
            Span::styled(cell, title_style())
        } else {
            Span::styled(cell, text_style(theme))
        };
        spans.push(span);
        spans.push(Span::raw(" "));

        weekday += 1;
        if weekday == 7 {
            lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::raw("  "));
            weekday = 0;
        }
    }
    if spans.len() > 1 {
        lines.push(Line::from(spans));
    }
    lines
}

/// Format accumulated focus seconds as "Xh Ym" or "Ym Zs"
fn format_focus(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_focus() {
        assert_eq!(format_focus(0), "0s");
        assert_eq!(format_focus(45), "45s");
        assert_eq!(format_focus(90), "1m 30s");
        assert_eq!(format_focus(3660), "1h 1m");
        assert_eq!(format_focus(36000), "10h 0m");
    }
}
