use crate::app::AppState;
use crate::report::compute_achievements;
use crate::ui::styles::{border_style, dim_style, success_style, text_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the achievements screen
pub fn render_achievements_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.settings.theme;
    let achievements = compute_achievements(&app.store);
    let unlocked_count = achievements.iter().filter(|a| a.unlocked).count();

    let mut lines: Vec<Line> = vec![
        Line::raw(""),
        Line::styled(
            format!("  {} of {} unlocked", unlocked_count, achievements.len()),
            dim_style(),
        ),
    ];

    for achievement in &achievements {
        lines.push(Line::raw(""));

        let star = if achievement.unlocked { "★" } else { "☆" };
        let headline_style = if achievement.unlocked {
            success_style()
        } else {
            dim_style()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", star), headline_style),
            Span::styled(achievement.title, headline_style),
        ]));
        lines.push(Line::styled(
            format!("     {}", achievement.description),
            if achievement.unlocked {
                text_style(theme)
            } else {
                dim_style()
            },
        ));
        if achievement.unlocked {
            lines.push(Line::styled(
                format!("     {}", achievement.unlock_text),
                dim_style(),
            ));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Achievements ", title_style())),
    );

    f.render_widget(paragraph, area);
}
