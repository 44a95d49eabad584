use crate::domain::Task;
use crate::persistence::{atomic_write, read_file};
use anyhow::Result;
use std::path::Path;

/// Load all tasks from the store. A missing file means a fresh install and
/// a file that fails to parse is treated the same way rather than blocking
/// startup; the next save rewrites it whole.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Result<Vec<Task>> {
    let content = read_file(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

/// Save the full task collection. Writes are whole-file and atomic; there
/// is no incremental update path.
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    atomic_write(path, &json)?;
    Ok(())
}
