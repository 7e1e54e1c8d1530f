use crate::app::AppState;
use crate::domain::UiMode;
use crate::timer::Orientation;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Any keypress clears the transient status line
    app.status_message = None;

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTodo | UiMode::EditingTodo => handle_input_form_mode(app, key),
        UiMode::TimerSetup => handle_timer_setup_mode(app, key),
        UiMode::TimerActive => handle_timer_active_mode(app, key),
        UiMode::History | UiMode::Statistics | UiMode::Achievements => {
            handle_secondary_screen(app, key)
        }
        UiMode::Settings => handle_settings_mode(app, key),
        UiMode::Onboarding => handle_onboarding_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_delete_mode(app, key),
    }
}

/// Keys on the main list
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Complete via the commitment timer (or reopen a done todo)
        KeyCode::Enter => {
            app.activate_selected();
            Ok(false)
        }

        // Complete without timer - the explicit shortcut
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.complete_selected_without_timer();
            Ok(false)
        }

        // Add / edit / delete
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.begin_add_todo();
            Ok(false)
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.begin_edit_selected();
            Ok(false)
        }
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.request_delete_selected();
            Ok(false)
        }

        // Toggle the done-today section
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.toggle_show_done();
            Ok(false)
        }

        // Secondary screens
        KeyCode::Char('h') | KeyCode::Char('H') => {
            app.open_screen(UiMode::History);
            Ok(false)
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.open_screen(UiMode::Statistics);
            Ok(false)
        }
        KeyCode::Char('v') | KeyCode::Char('V') => {
            app.open_screen(UiMode::Achievements);
            Ok(false)
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.open_screen(UiMode::Settings);
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Text entry in the add/edit form
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.cancel_input_form();
        }
        KeyCode::Enter => {
            app.save_input_form();
        }
        KeyCode::Tab => {
            if let Some(form) = app.input_form.as_mut() {
                form.next_field();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.input_form.as_mut() {
                form.field_mut().pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.input_form.as_mut() {
                form.field_mut().push(c);
            }
        }
        _ => {}
    }
    Ok(false)
}

/// Duration picker for the commitment timer
fn handle_timer_setup_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.cancel_timer_setup();
        }
        KeyCode::Enter => {
            app.confirm_timer_setup();
        }
        KeyCode::Left | KeyCode::Right => {
            if let Some(setup) = app.timer_setup.as_mut() {
                setup.field = 1 - setup.field;
            }
        }
        KeyCode::Up => {
            if let Some(setup) = app.timer_setup.as_mut() {
                if setup.field == 0 {
                    setup.minutes = (setup.minutes + 1).min(59);
                } else {
                    setup.seconds = (setup.seconds + 1).min(59);
                }
            }
        }
        KeyCode::Down => {
            if let Some(setup) = app.timer_setup.as_mut() {
                if setup.field == 0 {
                    setup.minutes = setup.minutes.saturating_sub(1);
                } else {
                    setup.seconds = setup.seconds.saturating_sub(1);
                }
            }
        }
        _ => {}
    }
    Ok(false)
}

/// The fullscreen timer. `l`/`p`/`f` stand in for rotating the device
/// into landscape, portrait, or laying it flat.
fn handle_timer_active_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let showing_disappointment = app
        .active_timer
        .as_ref()
        .map(|a| a.disappointment.is_some())
        .unwrap_or(false);

    if showing_disappointment {
        // Only the OK acknowledgement works here
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.acknowledge_disappointment();
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('l') | KeyCode::Char('L') => {
            app.timer_orientation(Orientation::Landscape);
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.timer_orientation(Orientation::Portrait);
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.timer_orientation(Orientation::Unknown);
        }
        KeyCode::Esc => {
            app.dismiss_timer();
        }
        _ => {}
    }
    Ok(false)
}

/// History, statistics and achievements are read-only screens
fn handle_secondary_screen(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.close_screen();
        }
        KeyCode::Up => {
            app.history_scroll = app.history_scroll.saturating_sub(1);
        }
        KeyCode::Down => {
            app.history_scroll += 1;
        }
        KeyCode::Left => {
            if app.ui_mode == UiMode::Statistics {
                app.shift_stats_month(false);
            }
        }
        KeyCode::Right => {
            if app.ui_mode == UiMode::Statistics {
                app.shift_stats_month(true);
            }
        }
        _ => {}
    }
    Ok(false)
}

fn handle_settings_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.close_screen();
        }
        KeyCode::Up => {
            app.settings_move(false);
        }
        KeyCode::Down => {
            app.settings_move(true);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.settings_activate();
        }
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            app.adjust_default_minutes(true);
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
            app.adjust_default_minutes(false);
        }
        _ => {}
    }
    Ok(false)
}

fn handle_onboarding_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Right => {
            app.advance_onboarding();
        }
        KeyCode::Left => {
            app.onboarding_page = app.onboarding_page.saturating_sub(1);
        }
        KeyCode::Esc => {
            app.finish_onboarding();
        }
        _ => {}
    }
    Ok(false)
}

fn handle_confirm_delete_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_delete();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_delete();
        }
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Todo, TodoStore};
    use crate::persistence::Settings;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> AppState {
        let mut store = TodoStore::new();
        store.add(Todo::new("Something"));
        let mut settings = Settings::default();
        settings.has_seen_onboarding = true;
        settings.notifications_enabled = false;
        AppState::new(store, settings)
    }

    #[test]
    fn test_quit_key() {
        let mut app = test_app();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());
        assert!(!handle_key(&mut app, press(KeyCode::Char('a'))).unwrap());
    }

    #[test]
    fn test_enter_opens_timer_setup() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::TimerSetup);
    }

    #[test]
    fn test_timer_keys_drive_orientation() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::TimerActive);

        handle_key(&mut app, press(KeyCode::Char('l'))).unwrap();
        let active = app.active_timer.as_ref().unwrap();
        assert_eq!(
            active.controller.state(),
            crate::timer::RunState::Running
        );
    }

    #[test]
    fn test_esc_dismisses_timer() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        handle_key(&mut app, press(KeyCode::Esc)).unwrap();

        assert!(app.active_timer.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
        // Dismissal is not a completion
        assert_eq!(app.store.open_count(), 1);
    }

    #[test]
    fn test_form_typing_and_save() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTodo);

        for c in "Buy milk".chars() {
            handle_key(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.open_count(), 2);
        assert!(app
            .store
            .open_todos()
            .iter()
            .any(|t| t.title == "Buy milk"));
    }

    #[test]
    fn test_secondary_screens_open_and_close() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('s'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Statistics);
        handle_key(&mut app, press(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_onboarding_skip() {
        let store = TodoStore::new();
        let mut settings = Settings::default();
        settings.notifications_enabled = false;
        let mut app = AppState::new(store, settings);
        assert_eq!(app.ui_mode, UiMode::Onboarding);

        handle_key(&mut app, press(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.settings.has_seen_onboarding);
    }
}
