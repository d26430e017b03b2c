//! Shared testing utilities for nexus CLI and library tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use chrono::{Days, Local};
use nexus::{Reservation, Settings};
use std::fs;
use std::path::{Path, PathBuf};

/// Testing harness providing an isolated working directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory used as the working directory of CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `nexus` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nexus").expect("Failed to locate nexus binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Write `nexus.toml` into the work directory.
    pub fn write_settings(&self, content: &str) {
        self.root.child("nexus.toml").write_str(content).expect("Failed to write nexus.toml");
    }

    /// Settings whose record store lives inside the work directory.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.storage.data_dir = self.data_dir();
        settings
    }

    /// Default record store directory.
    pub fn data_dir(&self) -> PathBuf {
        self.work_dir().join(".nexus")
    }

    /// Default record store file.
    pub fn store_file(&self) -> PathBuf {
        self.data_dir().join("nexus-reservations.json")
    }

    /// Reservations currently persisted in the default store file.
    pub fn stored_reservations(&self) -> Vec<Reservation> {
        let path = self.store_file();
        if !path.exists() {
            return Vec::new();
        }
        let content = fs::read_to_string(path).expect("Failed to read store file");
        serde_json::from_str(&content).expect("Store file should hold a reservation list")
    }
}

/// A date `days` after today in the local timezone, as `YYYY-MM-DD`.
#[allow(dead_code)]
pub fn days_from_today(days: u64) -> String {
    let today = Local::now().date_naive();
    today.checked_add_days(Days::new(days)).expect("date in range").to_string()
}

/// A date `days` before today in the local timezone, as `YYYY-MM-DD`.
#[allow(dead_code)]
pub fn days_before_today(days: u64) -> String {
    let today = Local::now().date_naive();
    today.checked_sub_days(Days::new(days)).expect("date in range").to_string()
}
