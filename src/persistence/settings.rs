use crate::persistence::atomic_write;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    System,
    Light,
    Dark,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::System => "System",
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Cycle to the next theme (for the settings screen toggle)
    pub fn next(&self) -> Theme {
        match self {
            Theme::System => Theme::Light,
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
        }
    }
}

/// User settings stored in settings.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
    /// Pre-selected minutes in the timer setup sheet
    #[serde(default = "default_timer_minutes")]
    pub default_timer_minutes: u32,
    #[serde(default)]
    pub has_seen_onboarding: bool,
}

fn default_true() -> bool {
    true
}

fn default_timer_minutes() -> u32 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            notifications_enabled: true,
            default_timer_minutes: 5,
            has_seen_onboarding: false,
        }
    }
}

/// Load settings; a missing file yields defaults
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    Ok(settings)
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    atomic_write(path, &json)?;
    Ok(())
}
