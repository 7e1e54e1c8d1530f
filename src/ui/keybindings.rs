use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Render the keybindings hint bar. A transient status message replaces
/// the hints until the next keypress.
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(message) = &app.status_message {
        let paragraph = Paragraph::new(Line::raw(format!(" {}", message))).style(hint_style());
        f.render_widget(paragraph, area);
        return;
    }

    let hints = match app.ui_mode {
        UiMode::Normal => {
            " ↑/↓ select   Enter timer   d done   a add   e edit   x delete   c done-view   h history   s stats   v achievements   o settings   q quit"
        }
        UiMode::AddingTodo | UiMode::EditingTodo => {
            " Tab next field   Enter save   Esc cancel"
        }
        UiMode::TimerSetup => " ↑/↓ adjust   ←/→ min/sec   Enter start   Esc cancel",
        UiMode::TimerActive => " l landscape   p portrait   f flat   Esc give up",
        UiMode::Statistics => " ←/→ month   Esc back",
        UiMode::History => " ↑/↓ scroll   Esc back",
        UiMode::Achievements => " Esc back",
        UiMode::Settings => " ↑/↓ select   Enter toggle   +/- adjust   Esc back",
        UiMode::Onboarding => " Enter next   ← back   Esc skip",
        UiMode::ConfirmDelete => " y delete   n keep",
    };

    let paragraph = Paragraph::new(Line::raw(hints)).style(hint_style());
    f.render_widget(paragraph, area);
}
