//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestFixture {
    temp_dir: TempDir,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write a payload file into the fixture directory.
    pub fn write_payload(&self, body: &str) -> PathBuf {
        let path = self.temp_dir.path().join("dashboard-data.json");
        fs::write(&path, body).expect("Failed to write payload");
        path
    }

    /// Path to a file that does not exist.
    pub fn missing_payload(&self) -> PathBuf {
        self.temp_dir.path().join("nonexistent.json")
    }

    /// Command preconfigured to ignore any ambient user config.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("questdash").expect("binary builds");
        cmd.env("QUESTDASH_CONFIG", self.temp_dir.path().join("no-config.toml"));
        cmd.env_remove("QUESTDASH_DATA");
        cmd
    }
}

/// A payload with two finished quests sharing a completed_date, for
/// sort-order assertions.
pub const TIE_BREAK_PAYLOAD: &str = r#"{
    "generated_at": "2024-03-05T10:00:00Z",
    "summary": { "total": 2, "by_status": { "finished": 2 } },
    "quests": [
        { "title": "B", "quest_id": "q-b", "status": "finished",
          "completed_date": "2024-01-01" },
        { "title": "A", "quest_id": "q-a", "status": "finished",
          "completed_date": "2024-01-01" }
    ]
}"#;

pub const EMPTY_PAYLOAD: &str = r#"{
    "generated_at": "2024-03-05T10:00:00Z",
    "summary": { "total": 0, "by_status": {} },
    "quests": []
}"#;
