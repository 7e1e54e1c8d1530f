/// Physical device orientation reported by the host.
/// `Unknown` covers flat/face-up readings and carries no information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Unknown,
}

/// Host application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Active,
    Inactive,
    Background,
}

impl LifecyclePhase {
    /// Inactive and background both mean the user left mid-run
    pub fn is_away(&self) -> bool {
        matches!(self, Self::Inactive | Self::Background)
    }
}

/// State of one timer run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Waiting for the first landscape rotation
    AwaitingStart,
    /// Countdown ticking
    Running,
    /// Left landscape mid-run; grace window counting down
    PortraitGrace,
    /// Countdown reached zero; waiting for portrait confirmation
    Finished,
    /// Terminal: success
    Completed,
    /// Terminal: cancelled
    Abandoned,
    /// Torn down by the host without an outcome
    Closed,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Abandoned | Self::Closed)
    }
}

/// Why a run was abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbandonReason {
    GraceExpired,
    AppBackgrounded,
}

/// Terminal disposition of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    Completed,
    Abandoned(AbandonReason),
}

/// Events the controller emits for the host to render and act on.
/// At most one of `Completed`/`Abandoned` is ever emitted per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    Started,
    Tick { remaining_seconds: u32 },
    PausedForPortrait { grace_remaining_seconds: u32 },
    Resumed,
    FinishedCountdown,
    Completed,
    Abandoned { reason: AbandonReason },
}
