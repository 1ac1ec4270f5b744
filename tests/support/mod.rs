use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// A throwaway store directory with its own config, so tests never touch the
/// user's real data or config dirs.
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let store = Self { dir };
        store
            .write_config("")
            .expect("failed to write default config");
        store
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn store_file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.path().join("studyplan.toml")
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.config_file();
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Seed the store file with raw JSON, bypassing the CLI
    pub fn write_store(&self, contents: &str) -> std::io::Result<()> {
        fs::write(self.store_file(), contents)
    }

    /// Read the persisted task array back as JSON values
    pub fn read_store(&self) -> Vec<Value> {
        let contents = fs::read_to_string(self.store_file()).expect("store file");
        serde_json::from_str(&contents).expect("store file json")
    }
}

pub fn studyplan_cmd(store: &TestStore) -> Command {
    let mut cmd = Command::cargo_bin("studyplan").expect("studyplan binary");
    cmd.env("STUDYPLAN_STORE", store.store_file());
    cmd.env("STUDYPLAN_CONFIG", store.config_file());
    cmd.current_dir(store.path());
    cmd
}

/// Run `add` and return the new task's id from the JSON envelope
pub fn add_task(store: &TestStore, title: &str, subject: &str, date: &str) -> String {
    let output = studyplan_cmd(store)
        .args(["add", title, "--subject", subject, "--date", date, "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).expect("add json");
    value["data"]["id"].as_str().expect("task id").to_string()
}
