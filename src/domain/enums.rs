/// Which screen (or overlay) the application is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTodo,
    EditingTodo,
    TimerSetup,
    TimerActive,
    History,
    Statistics,
    Achievements,
    Settings,
    Onboarding,
    ConfirmDelete,
}

impl UiMode {
    /// Screens that sit on top of the list and return to it on Esc
    pub fn is_secondary_screen(&self) -> bool {
        matches!(
            self,
            Self::History | Self::Statistics | Self::Achievements | Self::Settings
        )
    }
}
