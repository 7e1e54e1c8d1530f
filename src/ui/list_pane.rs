use crate::app::AppState;
use crate::domain::Todo;
use crate::ui::styles::{
    border_style, category_style, dim_style, done_style, overdue_style, selected_style,
    text_style, title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the main todo list: open todos on top, the done-today section
/// below when expanded
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let now = Local::now();
    let today = now.date_naive();
    let open = app.store.open_todos();
    let done_today = app.store.completed_on(today);

    let date = now.format("%a %b %d");
    let streak = app.store.current_streak(today);
    let title = if streak > 1 {
        format!(" Doable ({}) — {} day streak ", date, streak)
    } else {
        format!(" Doable ({}) ", date)
    };

    if open.is_empty() && done_today.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::styled("  No todos yet", text_style(app.settings.theme)),
            Line::styled(
                "  Press 'a' to create your first todo",
                dim_style(),
            ),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        );
        f.render_widget(empty, area);
        return;
    }

    let mut items: Vec<ListItem> = Vec::new();
    let mut row_index = 0usize;

    for todo in &open {
        let line = open_todo_line(todo);
        let style = if row_index == app.selected_index {
            selected_style()
        } else {
            text_style(app.settings.theme)
        };
        items.push(ListItem::new(line).style(style));
        row_index += 1;
    }

    // Done-today section header (not selectable)
    if !done_today.is_empty() {
        let marker = if app.show_done { "▾" } else { "▸" };
        items.push(
            ListItem::new(Line::raw(format!(
                " {} Done today ({})",
                marker,
                done_today.len()
            )))
            .style(dim_style()),
        );
    }

    if app.show_done {
        for todo in &done_today {
            let line = done_todo_line(todo);
            let style = if row_index == app.selected_index {
                selected_style()
            } else {
                done_style()
            };
            items.push(ListItem::new(line).style(style));
            row_index += 1;
        }
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Line for an open todo: circle, title, schedule/overdue marker, category
fn open_todo_line(todo: &Todo) -> Line<'static> {
    let mut spans = vec![Span::raw(" ○ "), Span::raw(todo.title.clone())];

    if let Some(scheduled) = todo.scheduled_time {
        if todo.is_overdue(Local::now()) {
            spans.push(Span::styled(
                format!("  ⚠ overdue ({})", scheduled.format("%H:%M")),
                overdue_style(),
            ));
        } else {
            spans.push(Span::styled(
                format!("  ⏰ {}", scheduled.format("%H:%M")),
                dim_style(),
            ));
        }
    }

    if !todo.category.is_empty() {
        spans.push(Span::styled(
            format!("  [{}]", todo.category),
            category_style(),
        ));
    }

    Line::from(spans)
}

/// Line for a completed todo, with the timer badge when earned
fn done_todo_line(todo: &Todo) -> Line<'static> {
    let mut spans = vec![Span::raw("   ✓ "), Span::raw(todo.title.clone())];

    if todo.completed_with_timer {
        if let Some(secs) = todo.timer_duration_seconds {
            spans.push(Span::raw(format!("  ⏱ {}:{:02}", secs / 60, secs % 60)));
        }
    }

    Line::from(spans)
}
