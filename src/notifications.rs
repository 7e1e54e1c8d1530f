/// Cross-platform notification support
/// Currently only implements macOS notifications
///
/// All of these are fire-and-forget: they never block and never feed back
/// into the timer state machine.

#[cfg(target_os = "macos")]
use std::process::Command;

#[cfg(target_os = "macos")]
fn send(title: &str, body: &str) {
    let script = format!(
        r#"display notification "{}" with title "{}""#,
        body.replace('"', "\\\""),
        title.replace('"', "\\\"")
    );

    let _ = Command::new("osascript").arg("-e").arg(&script).output();
}

/// Countdown started
pub fn notify_timer_started(todo_title: &str) {
    #[cfg(target_os = "macos")]
    send("Doable - Timer Started", todo_title);

    #[cfg(not(target_os = "macos"))]
    {
        let _ = todo_title;
    }
}

/// Countdown reached zero; waiting for the confirmation rotation
pub fn notify_timer_finished(todo_title: &str) {
    #[cfg(target_os = "macos")]
    send("Doable - Timer Finished", todo_title);

    #[cfg(not(target_os = "macos"))]
    {
        let _ = todo_title;
    }
}

/// Run was abandoned
pub fn notify_timer_abandoned(todo_title: &str) {
    #[cfg(target_os = "macos")]
    send("Doable - Timer Cancelled", todo_title);

    #[cfg(not(target_os = "macos"))]
    {
        let _ = todo_title;
    }
}

/// A scheduled todo slipped past its time
pub fn notify_todo_reminder(todo_title: &str) {
    let title = crate::messages::random_notification_title();

    #[cfg(target_os = "macos")]
    send(title, todo_title);

    #[cfg(not(target_os = "macos"))]
    {
        let _ = (title, todo_title);
    }
}

/// A todo was completed (with or without the timer)
pub fn notify_todo_done(todo_title: &str) {
    #[cfg(target_os = "macos")]
    send("Doable - Completed", todo_title);

    #[cfg(not(target_os = "macos"))]
    {
        let _ = todo_title;
    }
}
