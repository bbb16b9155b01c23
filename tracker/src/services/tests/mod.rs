//! Service-specific tests
//!
//! Each service has its own test file; shared helpers live in `common`.

mod file_config;
mod http_config;

pub mod common {
    use tempfile::TempDir;

    use crate::services::FileKeyValueStore;

    /// File store rooted in a fresh temporary directory.
    /// Keep the `TempDir` alive for the duration of the test.
    pub fn temp_file_store() -> (FileKeyValueStore, TempDir) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = FileKeyValueStore::with_base_dir(dir.path().join("storage"));
        (store, dir)
    }
}
