//! Storage adapter for the task collection.
//!
//! The whole collection lives in one JSON file holding a task array in
//! insertion order. Every save is a full atomic rewrite (temp file + rename);
//! there are no incremental writes. A missing or undecodable file loads as an
//! empty collection so a corrupt blob never takes the application down.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempfile::NamedTempFile;
use tracing::warn;

use crate::error::{Error, Result};
use crate::task::Task;

/// File name of the persisted task collection
pub const STORE_FILE: &str = "tasks.json";

/// Storage manager for the persisted task collection
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Create a storage adapter backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default store location: the per-user data directory
    pub fn default_path() -> PathBuf {
        match ProjectDirs::from("", "", "studyplan") {
            Some(dirs) => dirs.data_dir().join(STORE_FILE),
            None => PathBuf::from(STORE_FILE),
        }
    }

    /// Path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted collection.
    ///
    /// Absence and decode failures both yield an empty collection; decode
    /// failures are logged but never surfaced to the caller.
    pub fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "unreadable task store, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "corrupt task store, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the store with the full collection.
    ///
    /// Writes to a temp file in the same directory and renames into place so
    /// a crash mid-write never leaves a truncated store behind.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let json = serde_json::to_string_pretty(tasks)?;
        let mut temp = NamedTempFile::new_in(&parent)?;
        temp.write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|err| Error::Io(err.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::parse_due_date;
    use tempfile::TempDir;

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            subject: "Math".to_string(),
            due_date: parse_due_date("2025-01-10").unwrap(),
            completed: false,
            created_at: None,
        }
    }

    #[test]
    fn load_missing_file_yields_empty() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join(STORE_FILE));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn load_corrupt_file_yields_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(STORE_FILE);
        fs::write(&path, "{not json").unwrap();

        let storage = Storage::new(path);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn load_wrong_shape_yields_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(STORE_FILE);
        fs::write(&path, r#"{"tasks": 3}"#).unwrap();

        let storage = Storage::new(path);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join(STORE_FILE));

        let tasks = vec![task("b", "Second"), task("a", "First")];
        storage.save(&tasks).unwrap();

        let loaded = storage.load();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("nested/dir").join(STORE_FILE));
        storage.save(&[task("a", "First")]).unwrap();
        assert_eq!(storage.load().len(), 1);
    }
}
