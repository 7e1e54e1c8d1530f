use rand::seq::SliceRandom;

/// Title of the disappointment screen shown after an abandoned run
pub const DISAPPOINTMENT_TITLE: &str = "Timer cancelled";

/// Flavor text for the disappointment screen. Presentation only; the
/// choice never affects control flow.
const DISAPPOINTMENT_MESSAGES: [&str; 7] = [
    "This wasn't very doable of you.",
    "You left the timer hanging. Rude.",
    "The timer was getting lonely.",
    "Come back! The timer misses you.",
    "That was a soft commitment.",
    "You ghosted the timer.",
    "Not your finest moment, champ.",
];

const NOTIFICATION_TITLES: [&str; 8] = [
    "Time to focus!",
    "You said you would.",
    "One thing at a time.",
    "The list is watching.",
    "Small steps count.",
    "Future you says thanks.",
    "Make it doable.",
    "Still on your list...",
];

/// Starter titles suggested when creating a new todo
const SUGGESTED_TODO_NAMES: [&str; 12] = [
    "Water the plants",
    "Reply to that email",
    "Stretch for five minutes",
    "Clear the kitchen table",
    "Take out the recycling",
    "Read ten pages",
    "Call a friend",
    "Back up the laptop",
    "Plan tomorrow",
    "Go for a short walk",
    "Tidy the desk",
    "Drink a glass of water",
];

pub fn random_disappointment() -> &'static str {
    DISAPPOINTMENT_MESSAGES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DISAPPOINTMENT_MESSAGES[0])
}

pub fn random_notification_title() -> &'static str {
    NOTIFICATION_TITLES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(NOTIFICATION_TITLES[0])
}

pub fn random_todo_name() -> &'static str {
    SUGGESTED_TODO_NAMES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(SUGGESTED_TODO_NAMES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picks_come_from_the_pools() {
        for _ in 0..20 {
            assert!(DISAPPOINTMENT_MESSAGES.contains(&random_disappointment()));
            assert!(NOTIFICATION_TITLES.contains(&random_notification_title()));
            assert!(SUGGESTED_TODO_NAMES.contains(&random_todo_name()));
        }
    }
}
