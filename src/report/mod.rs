pub mod achievements;
pub mod stats;

pub use achievements::{compute_achievements, Achievement};
pub use stats::{
    calculate_summary, days_in_month, first_weekday, month_completion_days, shift_month,
    SummaryStats,
};
