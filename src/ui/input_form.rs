use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::layout::create_modal_area;
use crate::ui::styles::{active_field_style, dim_style, modal_bg_style, modal_title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add/edit form as a centered modal
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(form) = app.input_form.as_ref() else {
        return;
    };

    let modal_area = create_modal_area(area, 12);
    f.render_widget(Clear, modal_area);

    let field_line = |label: &str, value: &str, index: usize| -> Line<'static> {
        let marker = if form.editing_field == index { "▶ " } else { "  " };
        let style = if form.editing_field == index {
            active_field_style()
        } else {
            dim_style()
        };
        Line::from(vec![
            Span::styled(format!("{}{:<10}", marker, label), style),
            Span::raw(value.to_string()),
        ])
    };

    // Placeholder suggestion while the title is empty
    let title_value = if form.title.is_empty() {
        format!("({})", form.suggestion)
    } else {
        form.title.clone()
    };

    let lines = vec![
        Line::raw(""),
        field_line("Title", &title_value, 0),
        field_line("Notes", &form.notes, 1),
        field_line("Category", &form.category, 2),
        field_line("Time", &form.scheduled, 3),
        Line::raw(""),
        Line::styled("  Time is HH:MM today; leave empty to skip", dim_style()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [Tab]", modal_title_style()),
            Span::raw(" field  "),
            Span::styled("[Enter]", modal_title_style()),
            Span::raw(" save  "),
            Span::styled("[Esc]", modal_title_style()),
            Span::raw(" cancel"),
        ]),
    ];

    let title = if app.ui_mode == UiMode::EditingTodo {
        " Edit Todo "
    } else {
        " New Todo "
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
