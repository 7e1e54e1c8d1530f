use crate::domain::Todo;
use crate::persistence::{atomic_write, read_file};
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

/// Import failures surfaced to the CLI
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read import file: {0}")]
    Io(#[from] std::io::Error),
    #[error("import file is not a valid todo export: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the todo store from todos.json; a missing file is an empty store
pub fn load_todos<P: AsRef<Path>>(path: P) -> Result<Vec<Todo>> {
    let path = path.as_ref();

    let content = read_file(path)?;
    if content.is_empty() {
        return Ok(Vec::new());
    }

    let todos: Vec<Todo> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse todos: {}", path.display()))?;
    Ok(todos)
}

/// Save the todo store to todos.json
pub fn save_todos<P: AsRef<Path>>(path: P, todos: &[Todo]) -> Result<()> {
    let json = serde_json::to_string_pretty(todos)?;
    atomic_write(path, &json)
}

/// Write a pretty-printed export of the store
pub fn export_todos<P: AsRef<Path>>(path: P, todos: &[Todo]) -> Result<()> {
    let json = serde_json::to_string_pretty(todos)?;
    atomic_write(path, &json)
}

/// Parse an export file for merging. The caller decides what to keep.
pub fn read_import<P: AsRef<Path>>(path: P) -> std::result::Result<Vec<Todo>, ImportError> {
    let content = std::fs::read_to_string(path)?;
    let todos: Vec<Todo> = serde_json::from_str(&content)?;
    Ok(todos)
}
