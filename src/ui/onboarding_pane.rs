use crate::app::{AppState, ONBOARDING_PAGES};
use crate::ui::styles::{dim_style, text_style, title_style};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

struct Page {
    title: &'static str,
    description: &'static str,
}

const PAGES: [Page; ONBOARDING_PAGES] = [
    Page {
        title: "Pick a todo",
        description: "Write down the things you actually mean to do.",
    },
    Page {
        title: "Set a timer",
        description: "Completing a todo starts a commitment countdown.",
    },
    Page {
        title: "Keep it in landscape",
        description: "The timer only runs while the device stays rotated.\nLeave early and the attempt is cancelled.",
    },
    Page {
        title: "Don't disappoint the timer",
        description: "It remembers. Build a streak instead.",
    },
];

/// Render the first-launch onboarding flow
pub fn render_onboarding_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.settings.theme;
    let page = &PAGES[app.onboarding_page.min(ONBOARDING_PAGES - 1)];

    let dots: String = (0..ONBOARDING_PAGES)
        .map(|i| if i == app.onboarding_page { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![
        Line::raw(""),
        Line::raw(""),
        Line::styled(page.title, title_style()),
        Line::raw(""),
    ];
    for text in page.description.lines() {
        lines.push(Line::styled(text.to_string(), text_style(theme)));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(dots, dim_style()));
    lines.push(Line::raw(""));

    let last_page = app.onboarding_page + 1 == ONBOARDING_PAGES;
    lines.push(Line::styled(
        if last_page {
            "[Enter] Let's go"
        } else {
            "[Enter] Next   [Esc] Skip"
        },
        dim_style(),
    ));

    let paragraph = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Welcome to Doable "));

    f.render_widget(paragraph, area);
}
