pub mod achievements_pane;
pub mod history_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod onboarding_pane;
pub mod settings_pane;
pub mod stats_pane;
pub mod styles;
pub mod timer_pane;
pub mod timer_setup;

use crate::app::AppState;
use crate::domain::UiMode;
use achievements_pane::render_achievements_pane;
use history_pane::render_history_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_confirm_delete_modal;
use onboarding_pane::render_onboarding_pane;
use ratatui::Frame;
use settings_pane::render_settings_pane;
use stats_pane::render_stats_pane;
use timer_pane::render_timer_pane;
use timer_setup::render_timer_setup;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);

    match app.ui_mode {
        UiMode::TimerActive => {
            // The run owns the whole screen
            render_timer_pane(f, app, layout.content_area);
            return;
        }
        UiMode::Onboarding => {
            render_onboarding_pane(f, app, layout.content_area);
            return;
        }
        UiMode::History => {
            render_history_pane(f, app, layout.content_area);
            return;
        }
        UiMode::Statistics => {
            render_stats_pane(f, app, layout.content_area);
            return;
        }
        UiMode::Achievements => {
            render_achievements_pane(f, app, layout.content_area);
            return;
        }
        UiMode::Settings => {
            render_settings_pane(f, app, layout.content_area);
            return;
        }
        _ => {}
    }

    // The list stays visible under form/setup/confirm overlays
    render_list_pane(f, app, layout.content_area);

    if app.input_form.is_some() {
        render_input_form(f, app, layout.content_area);
    }
    if app.ui_mode == UiMode::TimerSetup {
        render_timer_setup(f, app, layout.content_area);
    }
    if app.ui_mode == UiMode::ConfirmDelete {
        render_confirm_delete_modal(f, app, layout.content_area);
    }
}
