use crate::persistence::atomic_write;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Snapshot of the open-todo count for external widgets (status bars,
/// prompt segments). Rewritten on every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    pub open_count: usize,
    /// RFC 3339 timestamp of the last refresh
    pub updated_at: String,
}

impl WidgetSnapshot {
    pub fn new(open_count: usize) -> Self {
        Self {
            open_count,
            updated_at: chrono::Local::now().to_rfc3339(),
        }
    }
}

/// Write the widget snapshot
pub fn write_widget_snapshot<P: AsRef<Path>>(path: P, open_count: usize) -> Result<()> {
    let snapshot = WidgetSnapshot::new(open_count);
    let json = serde_json::to_string_pretty(&snapshot)?;
    atomic_write(path, &json)
}

/// Read the widget snapshot (for `doable widget`)
pub fn read_widget_snapshot<P: AsRef<Path>>(path: P) -> Result<WidgetSnapshot> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("No widget snapshot yet: {}", path.display()))?;
    let snapshot: WidgetSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("Invalid widget snapshot: {}", path.display()))?;
    Ok(snapshot)
}
