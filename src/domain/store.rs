use super::todo::Todo;
use chrono::{DateTime, Duration, Local, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// Ordered collection of todos with the derived views the UI renders.
///
/// The store never drives the completion timer; it only applies the
/// outcome the host hands it.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self { todos: Vec::new() }
    }

    pub fn from_todos(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn add(&mut self, todo: Todo) -> Uuid {
        let id = todo.id;
        self.todos.push(todo);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Todo> {
        let pos = self.todos.iter().position(|t| t.id == id)?;
        Some(self.todos.remove(pos))
    }

    /// Apply a successful countdown outcome
    pub fn complete_with_timer(&mut self, id: Uuid, total_seconds: u32) -> bool {
        match self.get_mut(id) {
            Some(todo) => {
                todo.complete_with_timer(total_seconds);
                true
            }
            None => false,
        }
    }

    /// The explicit shortcut; never goes through the timer
    pub fn complete_without_timer(&mut self, id: Uuid) -> bool {
        match self.get_mut(id) {
            Some(todo) => {
                todo.complete_without_timer();
                true
            }
            None => false,
        }
    }

    pub fn uncomplete(&mut self, id: Uuid) -> bool {
        match self.get_mut(id) {
            Some(todo) => {
                todo.uncomplete();
                true
            }
            None => false,
        }
    }

    /// Open todos, newest first
    pub fn open_todos(&self) -> Vec<&Todo> {
        let mut open: Vec<&Todo> = self.todos.iter().filter(|t| !t.is_completed).collect();
        open.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        open
    }

    pub fn open_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.is_completed).count()
    }

    /// Todos completed on the given calendar day, newest first
    pub fn completed_on(&self, day: NaiveDate) -> Vec<&Todo> {
        let mut done: Vec<&Todo> = self
            .todos
            .iter()
            .filter(|t| t.is_completed && t.completed_on(day))
            .collect();
        done.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        done
    }

    /// Completed todos grouped by day, excluding `today` (shown separately)
    pub fn history(&self, today: NaiveDate) -> BTreeMap<NaiveDate, Vec<&Todo>> {
        let mut grouped: BTreeMap<NaiveDate, Vec<&Todo>> = BTreeMap::new();
        for todo in &self.todos {
            if let Some(at) = todo.completed_at {
                let day = at.date_naive();
                if todo.is_completed && day != today {
                    grouped.entry(day).or_default().push(todo);
                }
            }
        }
        for todos in grouped.values_mut() {
            todos.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        }
        grouped
    }

    pub fn overdue(&self, now: DateTime<Local>) -> Vec<&Todo> {
        self.todos.iter().filter(|t| t.is_overdue(now)).collect()
    }

    /// Days on which at least one todo was completed
    pub fn completion_days(&self) -> BTreeSet<NaiveDate> {
        self.todos
            .iter()
            .filter(|t| t.is_completed)
            .filter_map(|t| t.completed_at.map(|at| at.date_naive()))
            .collect()
    }

    /// Consecutive days with at least one completion, counting back from
    /// `today`. A day without completions ends the scan, so the streak is 0
    /// until something is completed today.
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        let days = self.completion_days();
        let mut streak = 0;
        let mut day = today;
        while days.contains(&day) {
            streak += 1;
            day = day - Duration::days(1);
        }
        streak
    }

    /// Longest run of consecutive completion days ever recorded
    pub fn longest_streak(&self) -> u32 {
        let days = self.completion_days();
        let mut longest = 0u32;
        let mut run = 0u32;
        let mut prev: Option<NaiveDate> = None;

        for day in days {
            run = match prev {
                Some(p) if day - p == Duration::days(1) => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            prev = Some(day);
        }
        longest
    }

    /// Import todos, keeping existing ids. Returns (added, skipped).
    pub fn merge(&mut self, incoming: Vec<Todo>) -> (usize, usize) {
        let existing: BTreeSet<Uuid> = self.todos.iter().map(|t| t.id).collect();
        let mut added = 0;
        let mut skipped = 0;
        for todo in incoming {
            if existing.contains(&todo.id) {
                skipped += 1;
            } else {
                self.todos.push(todo);
                added += 1;
            }
        }
        (added, skipped)
    }
}
