use crate::domain::TodoStore;
use chrono::{DateTime, Datelike, Local, NaiveDate};
use std::collections::BTreeSet;

/// Summary shown on the statistics screen
#[derive(Debug)]
pub struct SummaryStats {
    pub total_todos: usize,
    pub open_count: usize,
    pub completed_count: usize,
    pub completed_today: usize,
    pub timer_completions: usize,
    pub shortcut_completions: usize,
    /// Seconds of countdown committed across all timer completions
    pub focus_seconds: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub overdue_count: usize,
}

/// Calculate the summary across the whole store
pub fn calculate_summary(store: &TodoStore, now: DateTime<Local>) -> SummaryStats {
    let today = now.date_naive();
    let completed: Vec<_> = store.todos().iter().filter(|t| t.is_completed).collect();

    let timer_completions = completed.iter().filter(|t| t.completed_with_timer).count();
    let focus_seconds = completed
        .iter()
        .filter_map(|t| t.timer_duration_seconds)
        .map(u64::from)
        .sum();

    SummaryStats {
        total_todos: store.len(),
        open_count: store.open_count(),
        completed_count: completed.len(),
        completed_today: store.completed_on(today).len(),
        timer_completions,
        shortcut_completions: completed.len() - timer_completions,
        focus_seconds,
        current_streak: store.current_streak(today),
        longest_streak: store.longest_streak(),
        overdue_count: store.overdue(now).len(),
    }
}

/// Days of the given month (1-based) that have at least one completion
pub fn month_completion_days(store: &TodoStore, year: i32, month: u32) -> BTreeSet<u32> {
    store
        .completion_days()
        .into_iter()
        .filter(|d| d.year() == year && d.month() == month)
        .map(|d| d.day())
        .collect()
}

/// Number of days in a month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(first_of_next) => (first_of_next - chrono::Duration::days(1)).day(),
        None => 30,
    }
}

/// Weekday column (0 = Monday) of the first day of the month
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_monday())
        .unwrap_or(0)
}

/// Step the displayed (year, month) backwards or forwards
pub fn shift_month(year: i32, month: u32, forward: bool) -> (i32, u32) {
    if forward {
        if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        }
    } else if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Todo;
    use chrono::Duration;

    fn store_with_mixed_completions() -> TodoStore {
        let mut store = TodoStore::new();
        store.add(Todo::new("Open one"));

        let mut timed = Todo::new("Timed");
        timed.complete_with_timer(600);
        store.add(timed);

        let mut quick = Todo::new("Quick");
        quick.complete_without_timer();
        store.add(quick);

        let mut old = Todo::new("Old timed");
        old.is_completed = true;
        old.completed_with_timer = true;
        old.timer_duration_seconds = Some(300);
        old.completed_at = Some(Local::now() - Duration::days(3));
        store.add(old);

        store
    }

    #[test]
    fn test_summary_counts() {
        let store = store_with_mixed_completions();
        let stats = calculate_summary(&store, Local::now());

        assert_eq!(stats.total_todos, 4);
        assert_eq!(stats.open_count, 1);
        assert_eq!(stats.completed_count, 3);
        assert_eq!(stats.completed_today, 2);
        assert_eq!(stats.timer_completions, 2);
        assert_eq!(stats.shortcut_completions, 1);
        assert_eq!(stats.focus_seconds, 900);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn test_month_completion_days() {
        let store = store_with_mixed_completions();
        let today = Local::now().date_naive();
        let days = month_completion_days(&store, today.year(), today.month());

        assert!(days.contains(&today.day()));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 12), 31);
    }

    #[test]
    fn test_first_weekday() {
        // 2026-06-01 is a Monday
        assert_eq!(first_weekday(2026, 6), 0);
        // 2026-08-01 is a Saturday
        assert_eq!(first_weekday(2026, 8), 5);
    }

    #[test]
    fn test_shift_month_wraps_years() {
        assert_eq!(shift_month(2026, 12, true), (2027, 1));
        assert_eq!(shift_month(2026, 1, false), (2025, 12));
        assert_eq!(shift_month(2026, 6, true), (2026, 7));
        assert_eq!(shift_month(2026, 6, false), (2026, 5));
    }
}
