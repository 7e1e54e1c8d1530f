use super::events::{
    AbandonReason, LifecyclePhase, Orientation, RunState, TimerOutcome, TimerSignal,
};

/// Width of the portrait-grace window, in whole-second ticks
pub const GRACE_SECONDS: u32 = 15;

/// Drives one timed-completion run for a single todo.
///
/// The controller is a pure state machine: orientation changes, lifecycle
/// changes and 1 Hz ticks go in, display/outcome signals come out. It owns
/// no clock and touches no storage; the host applies the terminal outcome
/// to the store.
///
/// Once a run reaches `Completed`, `Abandoned` or `Closed`, every further
/// event is a silent no-op. The terminal guarantee lives in the transition
/// methods themselves rather than in separate "already signalled" flags.
#[derive(Debug)]
pub struct TimerController {
    total_seconds: u32,
    remaining_seconds: u32,
    grace_remaining_seconds: u32,
    state: RunState,
    outcome: Option<TimerOutcome>,
}

impl TimerController {
    pub fn new(total_seconds: u32) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            grace_remaining_seconds: GRACE_SECONDS,
            state: RunState::AwaitingStart,
            outcome: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn grace_remaining_seconds(&self) -> u32 {
        self.grace_remaining_seconds
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Terminal disposition, once one exists. `Closed` never has one.
    pub fn outcome(&self) -> Option<TimerOutcome> {
        self.outcome
    }

    /// Feed an orientation reading. Unknown/flat readings carry no
    /// information and never transition.
    pub fn orientation_changed(&mut self, orientation: Orientation) -> Vec<TimerSignal> {
        if self.state.is_terminal() {
            return Vec::new();
        }

        match (self.state, orientation) {
            // Rotating into landscape begins the countdown; a zero-duration
            // run never starts (callers use the no-timer shortcut instead)
            (RunState::AwaitingStart, Orientation::Landscape) if self.total_seconds > 0 => {
                self.state = RunState::Running;
                vec![TimerSignal::Started]
            }
            // Returning to landscape within the grace window resumes with
            // the exact remaining value held at the pause
            (RunState::PortraitGrace, Orientation::Landscape) => {
                self.state = RunState::Running;
                self.grace_remaining_seconds = GRACE_SECONDS;
                vec![TimerSignal::Resumed]
            }
            // Leaving landscape mid-run opens a fresh grace window
            (RunState::Running, Orientation::Portrait) => {
                self.state = RunState::PortraitGrace;
                self.grace_remaining_seconds = GRACE_SECONDS;
                vec![TimerSignal::PausedForPortrait {
                    grace_remaining_seconds: GRACE_SECONDS,
                }]
            }
            // Portrait after the countdown finished confirms completion
            (RunState::Finished, Orientation::Portrait) => {
                self.state = RunState::Completed;
                self.outcome = Some(TimerOutcome::Completed);
                vec![TimerSignal::Completed]
            }
            _ => Vec::new(),
        }
    }

    /// Feed one whole-second tick
    pub fn tick(&mut self) -> Vec<TimerSignal> {
        match self.state {
            RunState::Running => {
                self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
                if self.remaining_seconds == 0 {
                    self.state = RunState::Finished;
                    vec![
                        TimerSignal::Tick {
                            remaining_seconds: 0,
                        },
                        TimerSignal::FinishedCountdown,
                    ]
                } else {
                    vec![TimerSignal::Tick {
                        remaining_seconds: self.remaining_seconds,
                    }]
                }
            }
            RunState::PortraitGrace => {
                self.grace_remaining_seconds = self.grace_remaining_seconds.saturating_sub(1);
                if self.grace_remaining_seconds == 0 {
                    self.abandon(AbandonReason::GraceExpired)
                } else {
                    vec![TimerSignal::PausedForPortrait {
                        grace_remaining_seconds: self.grace_remaining_seconds,
                    }]
                }
            }
            _ => Vec::new(),
        }
    }

    /// Feed a lifecycle change. Leaving the app while the countdown is
    /// alive (running or in grace) abandons the run; before the countdown
    /// started, and after it finished, leaving has no effect.
    pub fn lifecycle_changed(&mut self, phase: LifecyclePhase) -> Vec<TimerSignal> {
        if !phase.is_away() {
            return Vec::new();
        }
        match self.state {
            RunState::Running | RunState::PortraitGrace => {
                self.abandon(AbandonReason::AppBackgrounded)
            }
            _ => Vec::new(),
        }
    }

    /// Host tore the view down. No terminal signal is emitted; a dismissal
    /// after a terminal state is a no-op.
    pub fn dismiss(&mut self) {
        if !self.state.is_terminal() {
            self.state = RunState::Closed;
        }
    }

    fn abandon(&mut self, reason: AbandonReason) -> Vec<TimerSignal> {
        self.state = RunState::Abandoned;
        self.outcome = Some(TimerOutcome::Abandoned(reason));
        vec![TimerSignal::Abandoned { reason }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal_signals(signals: &[TimerSignal]) -> usize {
        signals
            .iter()
            .filter(|s| matches!(s, TimerSignal::Completed | TimerSignal::Abandoned { .. }))
            .count()
    }

    /// Scenario 1: full run in landscape, portrait confirmation
    #[test]
    fn full_run_completes_on_portrait_confirmation() {
        let mut run = TimerController::new(10);
        let mut emitted = Vec::new();

        emitted.extend(run.orientation_changed(Orientation::Landscape));
        assert_eq!(run.state(), RunState::Running);

        for _ in 0..10 {
            emitted.extend(run.tick());
        }
        assert_eq!(run.state(), RunState::Finished);
        assert_eq!(run.remaining_seconds(), 0);
        assert!(emitted.contains(&TimerSignal::FinishedCountdown));

        emitted.extend(run.orientation_changed(Orientation::Portrait));
        assert_eq!(run.state(), RunState::Completed);
        assert_eq!(run.outcome(), Some(TimerOutcome::Completed));
        assert_eq!(terminal_signals(&emitted), 1);
    }

    /// P1: each tick decrements by exactly 1, never below 0
    #[test]
    fn countdown_is_monotonic() {
        let mut run = TimerController::new(3);
        run.orientation_changed(Orientation::Landscape);

        assert_eq!(
            run.tick(),
            vec![TimerSignal::Tick {
                remaining_seconds: 2
            }]
        );
        assert_eq!(
            run.tick(),
            vec![TimerSignal::Tick {
                remaining_seconds: 1
            }]
        );
        assert_eq!(
            run.tick(),
            vec![
                TimerSignal::Tick {
                    remaining_seconds: 0
                },
                TimerSignal::FinishedCountdown
            ]
        );
        // Finished: further ticks change nothing
        assert!(run.tick().is_empty());
        assert_eq!(run.remaining_seconds(), 0);
    }

    /// Scenario 2 + P2 + P4: grace pause, resume with exact remaining,
    /// grace reset on re-entry
    #[test]
    fn grace_pause_and_resume_preserve_remaining() {
        let mut run = TimerController::new(30);
        run.orientation_changed(Orientation::Landscape);
        for _ in 0..5 {
            run.tick();
        }
        assert_eq!(run.remaining_seconds(), 25);

        let signals = run.orientation_changed(Orientation::Portrait);
        assert_eq!(run.state(), RunState::PortraitGrace);
        assert_eq!(
            signals,
            vec![TimerSignal::PausedForPortrait {
                grace_remaining_seconds: GRACE_SECONDS
            }]
        );

        // 5 grace ticks burn the window but not the main countdown
        for _ in 0..5 {
            run.tick();
        }
        assert_eq!(run.grace_remaining_seconds(), 10);
        assert_eq!(run.remaining_seconds(), 25);

        let signals = run.orientation_changed(Orientation::Landscape);
        assert_eq!(signals, vec![TimerSignal::Resumed]);
        assert_eq!(run.state(), RunState::Running);
        assert_eq!(run.remaining_seconds(), 25);
        // Grace resets for the next excursion
        assert_eq!(run.grace_remaining_seconds(), GRACE_SECONDS);

        run.orientation_changed(Orientation::Portrait);
        assert_eq!(run.grace_remaining_seconds(), GRACE_SECONDS);
    }

    /// Scenario 3: never returning to landscape abandons at grace expiry
    #[test]
    fn grace_expiry_abandons() {
        let mut run = TimerController::new(30);
        run.orientation_changed(Orientation::Landscape);
        run.tick();
        run.orientation_changed(Orientation::Portrait);

        let mut emitted = Vec::new();
        for _ in 0..GRACE_SECONDS {
            emitted.extend(run.tick());
        }

        assert_eq!(run.state(), RunState::Abandoned);
        assert_eq!(
            run.outcome(),
            Some(TimerOutcome::Abandoned(AbandonReason::GraceExpired))
        );
        assert_eq!(terminal_signals(&emitted), 1);
        assert_eq!(
            emitted.last(),
            Some(&TimerSignal::Abandoned {
                reason: AbandonReason::GraceExpired
            })
        );
    }

    /// Scenario 4 + P5: backgrounding mid-run abandons immediately
    #[test]
    fn backgrounding_while_running_abandons() {
        let mut run = TimerController::new(20);
        run.orientation_changed(Orientation::Landscape);
        for _ in 0..3 {
            run.tick();
        }

        let signals = run.lifecycle_changed(LifecyclePhase::Background);
        assert_eq!(
            signals,
            vec![TimerSignal::Abandoned {
                reason: AbandonReason::AppBackgrounded
            }]
        );
        assert_eq!(
            run.outcome(),
            Some(TimerOutcome::Abandoned(AbandonReason::AppBackgrounded))
        );
    }

    #[test]
    fn backgrounding_during_grace_abandons() {
        let mut run = TimerController::new(20);
        run.orientation_changed(Orientation::Landscape);
        run.tick();
        run.orientation_changed(Orientation::Portrait);

        let signals = run.lifecycle_changed(LifecyclePhase::Inactive);
        assert_eq!(
            signals,
            vec![TimerSignal::Abandoned {
                reason: AbandonReason::AppBackgrounded
            }]
        );
    }

    #[test]
    fn backgrounding_before_start_or_after_finish_is_noop() {
        let mut run = TimerController::new(10);
        assert!(run.lifecycle_changed(LifecyclePhase::Background).is_empty());
        assert_eq!(run.state(), RunState::AwaitingStart);

        run.orientation_changed(Orientation::Landscape);
        for _ in 0..10 {
            run.tick();
        }
        assert_eq!(run.state(), RunState::Finished);
        assert!(run.lifecycle_changed(LifecyclePhase::Background).is_empty());
        assert_eq!(run.state(), RunState::Finished);

        // Confirmation still works after the excursion
        run.orientation_changed(Orientation::Portrait);
        assert_eq!(run.outcome(), Some(TimerOutcome::Completed));
    }

    /// P3: racing grace expiry and backgrounding yields a single terminal
    #[test]
    fn racing_terminal_events_collapse_to_one() {
        let mut run = TimerController::new(30);
        run.orientation_changed(Orientation::Landscape);
        run.tick();
        run.orientation_changed(Orientation::Portrait);
        for _ in 0..(GRACE_SECONDS - 1) {
            run.tick();
        }

        let mut emitted = Vec::new();
        emitted.extend(run.tick()); // grace hits zero
        emitted.extend(run.lifecycle_changed(LifecyclePhase::Background));
        emitted.extend(run.tick());

        assert_eq!(terminal_signals(&emitted), 1);
        assert_eq!(
            run.outcome(),
            Some(TimerOutcome::Abandoned(AbandonReason::GraceExpired))
        );
    }

    /// Scenario 6 + P6: post-terminal events are silent no-ops
    #[test]
    fn post_terminal_events_are_ignored() {
        let mut run = TimerController::new(1);
        run.orientation_changed(Orientation::Landscape);
        run.tick();
        run.orientation_changed(Orientation::Portrait);
        assert_eq!(run.state(), RunState::Completed);

        assert!(run.orientation_changed(Orientation::Landscape).is_empty());
        assert!(run.orientation_changed(Orientation::Portrait).is_empty());
        assert!(run.tick().is_empty());
        assert!(run.lifecycle_changed(LifecyclePhase::Background).is_empty());
        assert_eq!(run.state(), RunState::Completed);
        assert_eq!(run.outcome(), Some(TimerOutcome::Completed));
    }

    /// Scenario 5: a zero-duration run never leaves AwaitingStart
    #[test]
    fn zero_duration_never_starts() {
        let mut run = TimerController::new(0);
        assert!(run.orientation_changed(Orientation::Landscape).is_empty());
        assert_eq!(run.state(), RunState::AwaitingStart);
        assert!(run.tick().is_empty());
        assert!(run.outcome().is_none());
    }

    #[test]
    fn unknown_orientation_is_noop_in_every_state() {
        let mut run = TimerController::new(5);
        assert!(run.orientation_changed(Orientation::Unknown).is_empty());

        run.orientation_changed(Orientation::Landscape);
        assert!(run.orientation_changed(Orientation::Unknown).is_empty());
        assert_eq!(run.state(), RunState::Running);

        run.orientation_changed(Orientation::Portrait);
        assert!(run.orientation_changed(Orientation::Unknown).is_empty());
        assert_eq!(run.state(), RunState::PortraitGrace);
    }

    #[test]
    fn landscape_while_finished_is_ignored() {
        let mut run = TimerController::new(2);
        run.orientation_changed(Orientation::Landscape);
        run.tick();
        run.tick();
        assert_eq!(run.state(), RunState::Finished);

        // No re-pausing after success; only portrait matters now
        assert!(run.orientation_changed(Orientation::Landscape).is_empty());
        assert_eq!(run.state(), RunState::Finished);
    }

    #[test]
    fn portrait_before_start_is_ignored() {
        let mut run = TimerController::new(5);
        assert!(run.orientation_changed(Orientation::Portrait).is_empty());
        assert_eq!(run.state(), RunState::AwaitingStart);
    }

    #[test]
    fn dismiss_tears_down_without_outcome() {
        let mut run = TimerController::new(10);
        run.orientation_changed(Orientation::Landscape);
        run.tick();

        run.dismiss();
        assert_eq!(run.state(), RunState::Closed);
        assert!(run.outcome().is_none());

        // Everything after teardown is inert
        assert!(run.tick().is_empty());
        assert!(run.orientation_changed(Orientation::Portrait).is_empty());
        assert!(run.lifecycle_changed(LifecyclePhase::Background).is_empty());
    }

    #[test]
    fn dismiss_after_terminal_keeps_outcome() {
        let mut run = TimerController::new(1);
        run.orientation_changed(Orientation::Landscape);
        run.tick();
        run.orientation_changed(Orientation::Portrait);

        run.dismiss();
        assert_eq!(run.state(), RunState::Completed);
        assert_eq!(run.outcome(), Some(TimerOutcome::Completed));
    }

    #[test]
    fn resumed_run_finishes_with_original_total() {
        let mut run = TimerController::new(4);
        run.orientation_changed(Orientation::Landscape);
        run.tick();
        run.tick();

        run.orientation_changed(Orientation::Portrait);
        run.tick();
        run.tick();
        run.orientation_changed(Orientation::Landscape);

        // Exactly the two outstanding seconds remain
        run.tick();
        assert_eq!(run.remaining_seconds(), 1);
        run.tick();
        assert_eq!(run.state(), RunState::Finished);
        assert_eq!(run.total_seconds(), 4);
    }
}
