use crate::domain::TodoStore;
use chrono::Timelike;

/// Completion count that unlocks Maker
const MAKER_COMPLETIONS: usize = 100;
/// Accumulated timer focus (10 hours) that unlocks Workaholic
const WORKAHOLIC_FOCUS_SECONDS: u64 = 36_000;
/// Sprinter: this many completions inside one hour, each untimed or short
const SPRINTER_COUNT: usize = 10;
const SPRINTER_MAX_TIMER_SECONDS: u32 = 60;

/// One achievement card
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub unlock_text: &'static str,
    pub unlocked: bool,
}

/// Compute all achievements from the store
pub fn compute_achievements(store: &TodoStore) -> Vec<Achievement> {
    let completed: Vec<_> = store.todos().iter().filter(|t| t.is_completed).collect();

    let focus_seconds: u64 = completed
        .iter()
        .filter_map(|t| t.timer_duration_seconds)
        .map(u64::from)
        .sum();

    let empire_done = completed
        .iter()
        .any(|t| t.title.trim().eq_ignore_ascii_case("Build an empire"));

    let early_bird = completed
        .iter()
        .any(|t| t.completed_at.map(|at| at.hour() < 8).unwrap_or(false));

    vec![
        Achievement {
            id: "maker",
            title: "Maker",
            description: "Complete 100 todos.",
            unlock_text: "One hundred things, actually done.",
            unlocked: completed.len() >= MAKER_COMPLETIONS,
        },
        Achievement {
            id: "workaholic",
            title: "Workaholic",
            description: "Accumulate 10 hours of timer focus.",
            unlock_text: "Ten hours held in landscape.",
            unlocked: focus_seconds >= WORKAHOLIC_FOCUS_SECONDS,
        },
        Achievement {
            id: "empire",
            title: "Empire",
            description: "Complete a todo called \"Build an empire\".",
            unlock_text: "Rome took longer.",
            unlocked: empire_done,
        },
        Achievement {
            id: "sprinter",
            title: "Sprinter",
            description: "Complete 10 quick todos within a single hour.",
            unlock_text: "Blink and you missed it.",
            unlocked: sprinter_unlocked(store),
        },
        Achievement {
            id: "earlybird",
            title: "Early Bird",
            description: "Complete a todo before 8 in the morning.",
            unlock_text: "The worm never stood a chance.",
            unlocked: early_bird,
        },
    ]
}

/// Sliding one-hour window over completions that were untimed or used a
/// timer of at most one minute
fn sprinter_unlocked(store: &TodoStore) -> bool {
    let mut times: Vec<i64> = store
        .todos()
        .iter()
        .filter(|t| t.is_completed)
        .filter(|t| {
            t.timer_duration_seconds
                .map(|secs| secs <= SPRINTER_MAX_TIMER_SECONDS)
                .unwrap_or(true)
        })
        .filter_map(|t| t.completed_at.map(|at| at.timestamp()))
        .collect();
    times.sort_unstable();

    let mut start = 0;
    for end in 0..times.len() {
        while times[end] - times[start] > 3600 {
            start += 1;
        }
        if end - start + 1 >= SPRINTER_COUNT {
            return true;
        }
    }
    false
}
