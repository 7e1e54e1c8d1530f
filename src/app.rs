use crate::domain::{Todo, TodoStore, UiMode};
use crate::messages;
use crate::notifications;
use crate::persistence::{
    save_settings, save_todos, settings_file, todos_file, widget_file, write_widget_snapshot,
    Settings,
};
use crate::timer::{
    LifecyclePhase, Orientation, SecondTicker, TimerController, TimerOutcome, TimerSignal,
};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveTime, TimeZone};
use std::collections::HashSet;
use uuid::Uuid;

/// Number of onboarding pages
pub const ONBOARDING_PAGES: usize = 4;

/// A row in the main list: open todos first, then (optionally) the todos
/// completed today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRow {
    pub id: Uuid,
    pub is_completed: bool,
}

/// Form state for adding or editing a todo
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub title: String,
    pub notes: String,
    pub category: String,
    /// Schedule as "HH:MM" (today); empty means unscheduled
    pub scheduled: String,
    /// 0 = title, 1 = notes, 2 = category, 3 = scheduled
    pub editing_field: usize,
    /// Some when editing an existing todo
    pub editing_id: Option<Uuid>,
    /// Placeholder suggestion shown while the title is empty
    pub suggestion: &'static str,
}

impl InputFormState {
    fn blank() -> Self {
        Self {
            title: String::new(),
            notes: String::new(),
            category: String::new(),
            scheduled: String::new(),
            editing_field: 0,
            editing_id: None,
            suggestion: messages::random_todo_name(),
        }
    }

    pub fn field_mut(&mut self) -> &mut String {
        match self.editing_field {
            0 => &mut self.title,
            1 => &mut self.notes,
            2 => &mut self.category,
            _ => &mut self.scheduled,
        }
    }

    pub fn next_field(&mut self) {
        self.editing_field = (self.editing_field + 1) % 4;
    }
}

/// Duration picker state for the timer setup sheet
#[derive(Debug, Clone)]
pub struct TimerSetupState {
    pub todo_id: Uuid,
    pub todo_title: String,
    pub minutes: u32,
    pub seconds: u32,
    /// 0 = minutes, 1 = seconds
    pub field: usize,
}

impl TimerSetupState {
    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }
}

/// The one active timer run. Dropping it cancels the tick source with it.
#[derive(Debug)]
pub struct ActiveTimer {
    pub todo_id: Uuid,
    pub todo_title: String,
    pub controller: TimerController,
    pub ticker: SecondTicker,
    /// Set once the run is abandoned; the screen stays up until confirmed
    pub disappointment: Option<&'static str>,
}

/// Main application state
pub struct AppState {
    pub store: TodoStore,
    pub settings: Settings,
    pub ui_mode: UiMode,
    pub selected_index: usize,
    pub show_done: bool,
    pub input_form: Option<InputFormState>,
    pub timer_setup: Option<TimerSetupState>,
    pub active_timer: Option<ActiveTimer>,
    pub pending_delete: Option<Uuid>,
    pub onboarding_page: usize,
    pub settings_selected: usize,
    pub history_scroll: usize,
    /// Month shown on the statistics calendar
    pub stats_year: i32,
    pub stats_month: u32,
    /// Transient line shown in the hint bar
    pub status_message: Option<String>,
    pub needs_save: bool,
    /// Overdue todos already nudged this session
    notified_overdue: HashSet<Uuid>,
}

impl AppState {
    pub fn new(store: TodoStore, settings: Settings) -> Self {
        let today = Local::now().date_naive();
        let ui_mode = if settings.has_seen_onboarding {
            UiMode::Normal
        } else {
            UiMode::Onboarding
        };

        Self {
            store,
            settings,
            ui_mode,
            selected_index: 0,
            show_done: false,
            input_form: None,
            timer_setup: None,
            active_timer: None,
            pending_delete: None,
            onboarding_page: 0,
            settings_selected: 0,
            history_scroll: 0,
            stats_year: today.year(),
            stats_month: today.month(),
            status_message: None,
            needs_save: false,
            notified_overdue: HashSet::new(),
        }
    }

    // --- List selection ---

    /// Rows currently visible in the list pane
    pub fn visible_rows(&self) -> Vec<ListRow> {
        let mut rows: Vec<ListRow> = self
            .store
            .open_todos()
            .iter()
            .map(|t| ListRow {
                id: t.id,
                is_completed: false,
            })
            .collect();

        if self.show_done {
            let today = Local::now().date_naive();
            rows.extend(self.store.completed_on(today).iter().map(|t| ListRow {
                id: t.id,
                is_completed: true,
            }));
        }
        rows
    }

    pub fn selected_row(&self) -> Option<ListRow> {
        self.visible_rows().get(self.selected_index).copied()
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let row_count = self.visible_rows().len();
        if self.selected_index + 1 < row_count {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let row_count = self.visible_rows().len();
        if row_count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= row_count {
            self.selected_index = row_count - 1;
        }
    }

    pub fn toggle_show_done(&mut self) {
        self.show_done = !self.show_done;
        self.clamp_selection();
    }

    // --- Add / edit / delete ---

    pub fn begin_add_todo(&mut self) {
        self.input_form = Some(InputFormState::blank());
        self.ui_mode = UiMode::AddingTodo;
    }

    pub fn begin_edit_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let Some(todo) = self.store.get(row.id) else {
            return;
        };

        let mut form = InputFormState::blank();
        form.title = todo.title.clone();
        form.notes = todo.notes.clone();
        form.category = todo.category.clone();
        form.scheduled = todo
            .scheduled_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default();
        form.editing_id = Some(todo.id);

        self.input_form = Some(form);
        self.ui_mode = UiMode::EditingTodo;
    }

    /// Commit the form. An empty title deletes the todo being edited and
    /// discards a new one (empty-on-blur semantics).
    pub fn save_input_form(&mut self) {
        let Some(form) = self.input_form.take() else {
            self.ui_mode = UiMode::Normal;
            return;
        };

        let title = form.title.trim().to_string();
        let scheduled_time = parse_schedule(&form.scheduled);

        match form.editing_id {
            Some(id) => {
                if title.is_empty() {
                    self.store.remove(id);
                } else if let Some(todo) = self.store.get_mut(id) {
                    todo.title = title;
                    todo.notes = form.notes.trim().to_string();
                    todo.category = form.category.trim().to_string();
                    todo.scheduled_time = scheduled_time;
                }
                self.needs_save = true;
            }
            None => {
                if !title.is_empty() {
                    let mut todo = Todo::new(title);
                    todo.notes = form.notes.trim().to_string();
                    todo.category = form.category.trim().to_string();
                    todo.scheduled_time = scheduled_time;
                    self.store.add(todo);
                    self.needs_save = true;
                    self.selected_index = 0;
                }
            }
        }

        self.clamp_selection();
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(row) = self.selected_row() {
            self.pending_delete = Some(row.id);
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            self.store.remove(id);
            self.needs_save = true;
            self.clamp_selection();
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- Completion ---

    /// Enter on a row: open todos get the timer setup sheet, completed
    /// todos flip back to open immediately
    pub fn activate_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };

        if row.is_completed {
            self.store.uncomplete(row.id);
            self.needs_save = true;
            self.clamp_selection();
            return;
        }

        let Some(todo) = self.store.get(row.id) else {
            return;
        };
        self.timer_setup = Some(TimerSetupState {
            todo_id: todo.id,
            todo_title: todo.title.clone(),
            minutes: self.settings.default_timer_minutes,
            seconds: 0,
            field: 0,
        });
        self.ui_mode = UiMode::TimerSetup;
    }

    /// The explicit no-timer shortcut; never touches the state machine
    pub fn complete_selected_without_timer(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if row.is_completed {
            return;
        }

        if self.store.complete_without_timer(row.id) {
            if self.settings.notifications_enabled {
                if let Some(todo) = self.store.get(row.id) {
                    notifications::notify_todo_done(&todo.title);
                }
            }
            self.needs_save = true;
            self.clamp_selection();
        }
    }

    /// Confirm the duration picker. A zero duration takes the no-timer
    /// shortcut instead of constructing a run that could never start.
    pub fn confirm_timer_setup(&mut self) {
        let Some(setup) = self.timer_setup.take() else {
            self.ui_mode = UiMode::Normal;
            return;
        };

        let total_seconds = setup.total_seconds();
        if total_seconds == 0 {
            if self.store.complete_without_timer(setup.todo_id) {
                self.needs_save = true;
            }
            self.clamp_selection();
            self.ui_mode = UiMode::Normal;
            return;
        }

        self.active_timer = Some(ActiveTimer {
            todo_id: setup.todo_id,
            todo_title: setup.todo_title,
            controller: TimerController::new(total_seconds),
            ticker: SecondTicker::new(),
            disappointment: None,
        });
        self.ui_mode = UiMode::TimerActive;
    }

    pub fn cancel_timer_setup(&mut self) {
        self.timer_setup = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- Timer run plumbing ---

    /// Called every loop iteration; drains whole seconds into the run
    pub fn tick(&mut self) {
        let Some(active) = self.active_timer.as_mut() else {
            return;
        };
        if active.controller.is_terminal() {
            return;
        }

        let elapsed = active.ticker.poll();
        let mut signals = Vec::new();
        for _ in 0..elapsed {
            signals.extend(active.controller.tick());
            if active.controller.is_terminal() {
                break;
            }
        }
        self.handle_timer_signals(signals);
    }

    pub fn timer_orientation(&mut self, orientation: Orientation) {
        let Some(active) = self.active_timer.as_mut() else {
            return;
        };
        let signals = active.controller.orientation_changed(orientation);
        self.handle_timer_signals(signals);
    }

    /// Terminal focus changes map to the app lifecycle stream
    pub fn timer_lifecycle(&mut self, phase: LifecyclePhase) {
        let Some(active) = self.active_timer.as_mut() else {
            return;
        };
        let signals = active.controller.lifecycle_changed(phase);
        self.handle_timer_signals(signals);
    }

    /// Esc on the timer screen: teardown without an outcome, or - once the
    /// run already ended in abandonment - acknowledge the cancellation
    pub fn dismiss_timer(&mut self) {
        let Some(active) = self.active_timer.as_mut() else {
            return;
        };

        if matches!(
            active.controller.outcome(),
            Some(TimerOutcome::Abandoned(_))
        ) {
            self.acknowledge_disappointment();
            return;
        }

        active.controller.dismiss();
        self.active_timer = None;
        self.ui_mode = UiMode::Normal;
    }

    /// OK on the disappointment screen; the todo is left untouched
    pub fn acknowledge_disappointment(&mut self) {
        self.active_timer = None;
        self.ui_mode = UiMode::Normal;
    }

    fn handle_timer_signals(&mut self, signals: Vec<TimerSignal>) {
        if signals.is_empty() {
            return;
        }
        let Some(active) = self.active_timer.as_ref() else {
            return;
        };
        let todo_id = active.todo_id;
        let todo_title = active.todo_title.clone();
        let total_seconds = active.controller.total_seconds();

        for signal in signals {
            match signal {
                TimerSignal::Started => {
                    // The countdown starts at the rotation, not at the
                    // moment the screen was presented
                    if let Some(active) = self.active_timer.as_mut() {
                        active.ticker.reset();
                    }
                    if self.settings.notifications_enabled {
                        notifications::notify_timer_started(&todo_title);
                    }
                }
                TimerSignal::FinishedCountdown => {
                    if self.settings.notifications_enabled {
                        notifications::notify_timer_finished(&todo_title);
                    }
                }
                TimerSignal::Completed => {
                    self.store.complete_with_timer(todo_id, total_seconds);
                    self.needs_save = true;
                    if self.settings.notifications_enabled {
                        notifications::notify_todo_done(&todo_title);
                    }
                    self.active_timer = None;
                    self.clamp_selection();
                    self.ui_mode = UiMode::Normal;
                    self.status_message = Some(format!("Completed: {}", todo_title));
                    return;
                }
                TimerSignal::Abandoned { .. } => {
                    if self.settings.notifications_enabled {
                        notifications::notify_timer_abandoned(&todo_title);
                    }
                    if let Some(active) = self.active_timer.as_mut() {
                        active.disappointment = Some(messages::random_disappointment());
                    }
                    return;
                }
                // Countdown display reads the controller directly
                TimerSignal::Tick { .. }
                | TimerSignal::PausedForPortrait { .. }
                | TimerSignal::Resumed => {}
            }
        }
    }

    /// Nudge once per session when a scheduled todo slips past its time
    pub fn check_overdue(&mut self) {
        if !self.settings.notifications_enabled {
            return;
        }
        let now = Local::now();
        let newly_overdue: Vec<(Uuid, String)> = self
            .store
            .overdue(now)
            .iter()
            .filter(|t| !self.notified_overdue.contains(&t.id))
            .map(|t| (t.id, t.title.clone()))
            .collect();

        for (id, title) in newly_overdue {
            notifications::notify_todo_reminder(&title);
            self.notified_overdue.insert(id);
        }
    }

    // --- Secondary screens ---

    pub fn open_screen(&mut self, mode: UiMode) {
        if mode.is_secondary_screen() {
            self.history_scroll = 0;
            self.settings_selected = 0;
            self.ui_mode = mode;
        }
    }

    pub fn close_screen(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn shift_stats_month(&mut self, forward: bool) {
        let (year, month) =
            crate::report::shift_month(self.stats_year, self.stats_month, forward);
        self.stats_year = year;
        self.stats_month = month;
    }

    // --- Onboarding ---

    pub fn advance_onboarding(&mut self) {
        if self.onboarding_page + 1 < ONBOARDING_PAGES {
            self.onboarding_page += 1;
        } else {
            self.finish_onboarding();
        }
    }

    pub fn finish_onboarding(&mut self) {
        self.settings.has_seen_onboarding = true;
        if let Err(e) = self.save_settings() {
            self.status_message = Some(format!("Could not save settings: {}", e));
        }
        self.ui_mode = UiMode::Normal;
    }

    // --- Settings ---

    pub fn settings_move(&mut self, down: bool) {
        let last = 3;
        if down {
            if self.settings_selected < last {
                self.settings_selected += 1;
            }
        } else if self.settings_selected > 0 {
            self.settings_selected -= 1;
        }
    }

    /// Enter/Space on a settings row
    pub fn settings_activate(&mut self) {
        match self.settings_selected {
            0 => self.settings.theme = self.settings.theme.next(),
            1 => self.settings.notifications_enabled = !self.settings.notifications_enabled,
            2 => {} // adjusted with +/- instead
            3 => self.export_data(),
            _ => {}
        }
        if let Err(e) = self.save_settings() {
            self.status_message = Some(format!("Could not save settings: {}", e));
        }
    }

    pub fn adjust_default_minutes(&mut self, increase: bool) {
        if self.settings_selected != 2 {
            return;
        }
        if increase {
            self.settings.default_timer_minutes =
                (self.settings.default_timer_minutes + 1).min(59);
        } else {
            self.settings.default_timer_minutes =
                self.settings.default_timer_minutes.saturating_sub(1);
        }
        if let Err(e) = self.save_settings() {
            self.status_message = Some(format!("Could not save settings: {}", e));
        }
    }

    fn export_data(&mut self) {
        let result = crate::persistence::default_export_file()
            .and_then(|path| {
                crate::persistence::export_todos(&path, self.store.todos()).map(|_| path)
            });
        self.status_message = Some(match result {
            Ok(path) => format!("Exported to {}", path.display()),
            Err(e) => format!("Export failed: {}", e),
        });
    }

    // --- Persistence ---

    pub fn save(&mut self) -> Result<()> {
        save_todos(todos_file()?, self.store.todos())?;
        write_widget_snapshot(widget_file()?, self.store.open_count())?;
        self.needs_save = false;
        Ok(())
    }

    pub fn save_settings(&self) -> Result<()> {
        save_settings(settings_file()?, &self.settings)
    }
}

/// Parse a "HH:MM" schedule as today's date. Empty or invalid input means
/// unscheduled.
fn parse_schedule(input: &str) -> Option<chrono::DateTime<Local>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M").ok()?;
    let date = Local::now().date_naive();
    Local.from_local_datetime(&date.and_time(time)).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::RunState;

    fn app_with_one_todo(title: &str) -> (AppState, Uuid) {
        let mut store = TodoStore::new();
        let id = store.add(Todo::new(title));
        let mut settings = Settings::default();
        settings.has_seen_onboarding = true;
        settings.notifications_enabled = false;
        (AppState::new(store, settings), id)
    }

    fn start_run(app: &mut AppState, minutes: u32, seconds: u32) {
        app.activate_selected();
        let setup = app.timer_setup.as_mut().unwrap();
        setup.minutes = minutes;
        setup.seconds = seconds;
        app.confirm_timer_setup();
    }

    #[test]
    fn test_first_launch_shows_onboarding() {
        let app = AppState::new(TodoStore::new(), Settings::default());
        assert_eq!(app.ui_mode, UiMode::Onboarding);

        let mut seen = Settings::default();
        seen.has_seen_onboarding = true;
        let app = AppState::new(TodoStore::new(), seen);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_timer_setup_opens_for_open_todo() {
        let (mut app, id) = app_with_one_todo("Focus on this");
        app.activate_selected();

        assert_eq!(app.ui_mode, UiMode::TimerSetup);
        let setup = app.timer_setup.as_ref().unwrap();
        assert_eq!(setup.todo_id, id);
        assert_eq!(setup.minutes, 5);
        assert_eq!(setup.seconds, 0);
    }

    #[test]
    fn test_zero_duration_takes_the_shortcut() {
        let (mut app, id) = app_with_one_todo("Zero");
        start_run(&mut app, 0, 0);

        // No run was constructed; the todo completed via the shortcut
        assert!(app.active_timer.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
        let todo = app.store.get(id).unwrap();
        assert!(todo.is_completed);
        assert!(!todo.completed_with_timer);
    }

    #[test]
    fn test_successful_run_completes_the_todo() {
        let (mut app, id) = app_with_one_todo("Timed");
        start_run(&mut app, 0, 2);
        assert_eq!(app.ui_mode, UiMode::TimerActive);

        app.timer_orientation(Orientation::Landscape);
        {
            let active = app.active_timer.as_mut().unwrap();
            let s1 = active.controller.tick();
            let s2 = active.controller.tick();
            app.handle_timer_signals(s1);
            app.handle_timer_signals(s2);
        }
        app.timer_orientation(Orientation::Portrait);

        assert!(app.active_timer.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
        let todo = app.store.get(id).unwrap();
        assert!(todo.is_completed);
        assert!(todo.completed_with_timer);
        assert_eq!(todo.timer_duration_seconds, Some(2));
        assert!(app.needs_save);
    }

    #[test]
    fn test_backgrounding_shows_disappointment_and_leaves_todo_open() {
        let (mut app, id) = app_with_one_todo("Abandoned");
        start_run(&mut app, 1, 0);

        app.timer_orientation(Orientation::Landscape);
        app.timer_lifecycle(LifecyclePhase::Background);

        let active = app.active_timer.as_ref().unwrap();
        assert!(active.disappointment.is_some());
        assert_eq!(active.controller.state(), RunState::Abandoned);
        assert!(!app.store.get(id).unwrap().is_completed);

        // Acknowledging returns to the list without mutating the store
        app.dismiss_timer();
        assert!(app.active_timer.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.store.get(id).unwrap().is_completed);
    }

    #[test]
    fn test_dismiss_before_terminal_has_no_outcome() {
        let (mut app, id) = app_with_one_todo("Dismissed");
        start_run(&mut app, 1, 0);
        app.timer_orientation(Orientation::Landscape);

        app.dismiss_timer();
        assert!(app.active_timer.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.store.get(id).unwrap().is_completed);
    }

    #[test]
    fn test_shortcut_completion_never_builds_a_run() {
        let (mut app, id) = app_with_one_todo("Quick");
        app.complete_selected_without_timer();

        assert!(app.active_timer.is_none());
        let todo = app.store.get(id).unwrap();
        assert!(todo.is_completed);
        assert!(!todo.completed_with_timer);
        assert!(todo.timer_duration_seconds.is_none());
    }

    #[test]
    fn test_activate_completed_row_reopens() {
        let (mut app, id) = app_with_one_todo("Reopen");
        app.complete_selected_without_timer();
        app.show_done = true;

        app.selected_index = 0;
        app.activate_selected();
        assert!(!app.store.get(id).unwrap().is_completed);
    }

    #[test]
    fn test_empty_title_discards_new_todo() {
        let (mut app, _) = app_with_one_todo("Existing");
        app.begin_add_todo();
        app.save_input_form();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_empty_title_on_edit_deletes() {
        let (mut app, id) = app_with_one_todo("Doomed");
        app.begin_edit_selected();
        app.input_form.as_mut().unwrap().title.clear();
        app.save_input_form();

        assert!(app.store.get(id).is_none());
    }

    #[test]
    fn test_parse_schedule() {
        assert!(parse_schedule("").is_none());
        assert!(parse_schedule("  ").is_none());
        assert!(parse_schedule("25:99").is_none());

        let parsed = parse_schedule("14:30").unwrap();
        assert_eq!(parsed.format("%H:%M").to_string(), "14:30");
    }

    #[test]
    fn test_visible_rows_with_done_section() {
        let (mut app, _) = app_with_one_todo("Open one");
        let done_id = app.store.add(Todo::new("Done one"));
        app.store.complete_without_timer(done_id);

        assert_eq!(app.visible_rows().len(), 1);
        app.toggle_show_done();
        let rows = app.visible_rows();
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].is_completed);
        assert!(rows[1].is_completed);
    }

    #[test]
    fn test_delete_flow() {
        let (mut app, id) = app_with_one_todo("Delete me");
        app.request_delete_selected();
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);

        app.confirm_delete();
        assert!(app.store.get(id).is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }
}
