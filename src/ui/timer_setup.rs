use crate::app::AppState;
use crate::ui::layout::create_modal_area;
use crate::ui::styles::{active_field_style, dim_style, modal_bg_style, modal_title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the duration picker sheet shown before a timer run
pub fn render_timer_setup(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(setup) = app.timer_setup.as_ref() else {
        return;
    };

    let modal_area = create_modal_area(area, 11);
    f.render_widget(Clear, modal_area);

    let minutes_style = if setup.field == 0 {
        active_field_style()
    } else {
        dim_style()
    };
    let seconds_style = if setup.field == 1 {
        active_field_style()
    } else {
        dim_style()
    };

    let lines = vec![
        Line::raw(""),
        Line::raw("  How long will you commit to"),
        Line::styled(format!("  {}?", setup.todo_title), modal_title_style()),
        Line::raw(""),
        Line::from(vec![
            Span::raw("        "),
            Span::styled(format!("{:02}", setup.minutes), minutes_style),
            Span::raw(" : "),
            Span::styled(format!("{:02}", setup.seconds), seconds_style),
        ]),
        Line::styled("        min  sec", dim_style()),
        Line::raw(""),
        Line::styled("  A zero duration completes right away", dim_style()),
        Line::from(vec![
            Span::styled("  [Enter]", modal_title_style()),
            Span::raw(" start  "),
            Span::styled("[Esc]", modal_title_style()),
            Span::raw(" cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Set Timer ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
