//! Test helpers for tracker tests

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracker::*;

use super::fixtures::TestFixtures;

/// Test helper utilities
pub struct TestHelpers;

impl TestHelpers {
    /// File-backed storage rooted inside `dir`
    pub fn storage_in(dir: &Path) -> FileKeyValueStore {
        FileKeyValueStore::with_base_dir(dir.join("storage"))
    }

    /// Write a config document to `dir/tracker.json` and return its path
    pub fn write_config(dir: &Path, document: &str) -> PathBuf {
        let path = dir.join("tracker.json");
        std::fs::write(&path, document).unwrap();
        path
    }

    /// Start a session reading its config from `config_path`
    pub async fn start_session(config_path: &Path, dir: &Path) -> TrackerSession<FileKeyValueStore> {
        let source = FileConfigSource::new(config_path);
        TrackerSession::start(&source, Self::storage_in(dir)).await
    }

    /// Start a session with no config document present
    pub async fn default_session(dir: &Path) -> TrackerSession<FileKeyValueStore> {
        Self::start_session(&dir.join("missing.json"), dir).await
    }

    /// Add every sample row, panicking on rejection
    pub fn seed_samples<S: KeyValueStore>(session: &mut TrackerSession<S>) {
        for (label, orders, complaints) in TestFixtures::sample_rows() {
            session.create_record(label, orders, complaints).unwrap();
        }
    }

    /// Raw JSON stored under `key`, parsed
    pub fn stored_json(dir: &Path, key: &str) -> Option<serde_json::Value> {
        Self::storage_in(dir)
            .get(key)
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    pub fn labels<S: KeyValueStore>(session: &TrackerSession<S>) -> Vec<String> {
        session.records().iter().map(|r| r.label().to_string()).collect()
    }

    pub fn temp_dir() -> TempDir {
        tempfile::tempdir().unwrap()
    }
}
