use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the doable directory - checks for a local .doable first, then falls
/// back to the global ~/.doable
pub fn get_data_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_dir(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".doable"))
}

/// Find a local .doable directory by walking up the directory tree
fn find_local_dir(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let data_dir = current.join(".doable");
        if data_dir.exists() && data_dir.is_dir() {
            return Some(data_dir);
        }
        current = current.parent()?;
    }
}

/// Ensure the doable directory exists
pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = get_data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .doable directory in the current directory
pub fn init_local_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let data_dir = current_dir.join(".doable");

    if data_dir.exists() {
        anyhow::bail!("Doable directory already exists: {}", data_dir.display());
    }

    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create directory: {}", data_dir.display()))?;

    Ok(data_dir)
}

/// Path to the todo store
pub fn todos_file() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join("todos.json"))
}

/// Path to the settings file
pub fn settings_file() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join("settings.json"))
}

/// Path to the widget snapshot consumed by status-bar widgets
pub fn widget_file() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join("widget.json"))
}

/// Default export path (doable-export-YYYY-MM-DD.json in the data dir)
pub fn default_export_file() -> Result<PathBuf> {
    let date = chrono::Local::now().format("%Y-%m-%d");
    Ok(ensure_data_dir()?.join(format!("doable-export-{}.json", date)))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file =
        NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if the file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_data_dir() {
        let dir = get_data_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".doable"));
    }

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        let content = "Hello, world!";
        atomic_write(&test_file, content).unwrap();

        let read_content = read_file(&test_file).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        atomic_write(&test_file, "first").unwrap();
        atomic_write(&test_file, "second").unwrap();

        assert_eq!(read_file(&test_file).unwrap(), "second");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("nonexistent.txt");

        let content = read_file(&test_file).unwrap();
        assert_eq!(content, "");
    }

    #[test]
    fn test_find_local_dir_walks_up() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_dir = temp_dir.path().join(".doable");
        fs::create_dir_all(&data_dir).unwrap();

        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = find_local_dir(&nested).unwrap();
        assert_eq!(found, data_dir);
    }
}
