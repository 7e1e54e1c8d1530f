pub mod controller;
pub mod events;
pub mod ticker;

pub use controller::{TimerController, GRACE_SECONDS};
pub use events::{
    AbandonReason, LifecyclePhase, Orientation, RunState, TimerOutcome, TimerSignal,
};
pub use ticker::{tick_duration, SecondTicker};
