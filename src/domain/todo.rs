use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item.
///
/// Invariants maintained by the completion operations:
/// - `completed_at` is `Some` iff `is_completed` is true
/// - `timer_duration_seconds` is `Some` only when `completed_with_timer` is true
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub category: String,
    pub is_completed: bool,
    pub created_at: DateTime<Local>,
    /// Optional schedule; in the past while incomplete means "overdue"
    #[serde(default)]
    pub scheduled_time: Option<DateTime<Local>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Local>>,
    /// True only when completion went through a full countdown run
    #[serde(default)]
    pub completed_with_timer: bool,
    #[serde(default)]
    pub timer_duration_seconds: Option<u32>,
}

impl Todo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            notes: String::new(),
            category: String::new(),
            is_completed: false,
            created_at: Local::now(),
            scheduled_time: None,
            completed_at: None,
            completed_with_timer: false,
            timer_duration_seconds: None,
        }
    }

    /// Mark completed after a successful countdown run
    pub fn complete_with_timer(&mut self, total_seconds: u32) {
        self.is_completed = true;
        self.completed_at = Some(Local::now());
        self.completed_with_timer = true;
        self.timer_duration_seconds = Some(total_seconds);
    }

    /// Mark completed via the explicit no-timer shortcut
    pub fn complete_without_timer(&mut self) {
        self.is_completed = true;
        self.completed_at = Some(Local::now());
        self.completed_with_timer = false;
        self.timer_duration_seconds = None;
    }

    /// Reopen a completed todo, clearing all completion metadata
    pub fn uncomplete(&mut self) {
        self.is_completed = false;
        self.completed_at = None;
        self.completed_with_timer = false;
        self.timer_duration_seconds = None;
    }

    /// Scheduled in the past and still open
    pub fn is_overdue(&self, now: DateTime<Local>) -> bool {
        match self.scheduled_time {
            Some(scheduled) => !self.is_completed && scheduled < now,
            None => false,
        }
    }

    /// Whether this todo was completed on the given calendar day
    pub fn completed_on(&self, day: NaiveDate) -> bool {
        self.completed_at
            .map(|at| at.date_naive() == day)
            .unwrap_or(false)
    }
}
