use crate::app::AppState;
use crate::ui::layout::create_modal_area;
use crate::ui::styles::{modal_bg_style, modal_title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the delete confirmation modal
pub fn render_confirm_delete_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(id) = app.pending_delete else {
        return;
    };
    let title = app
        .store
        .get(id)
        .map(|t| t.title.clone())
        .unwrap_or_default();

    let modal_area = create_modal_area(area, 8);
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  Delete \"{}\"?", title)),
        Line::raw(""),
        Line::raw("  This cannot be undone."),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(" Delete  "),
            Span::styled("[n]", modal_title_style()),
            Span::raw(" Keep  "),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Delete Todo ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
