//! File-backed key-value storage
//!
//! Each key is stored as one file inside a base directory. Writes go to a
//! temporary file first and are renamed into place, so a crash mid-write
//! leaves the previous value intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};
use crate::traits::KeyValueStore;

/// Real key-value store persisting to the local file system
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    /// Base directory for all keys
    base_dir: PathBuf,
    quota_bytes: Option<u64>,
}

impl FileKeyValueStore {
    /// Create a store rooted at `./.tracker`
    pub fn new() -> Self {
        Self::with_base_dir(PathBuf::from("./.tracker"))
    }

    /// Create with custom base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            quota_bytes: None,
        }
    }

    /// Reject single values larger than `quota_bytes`
    pub fn with_quota(mut self, quota_bytes: u64) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// File holding the value of `key`
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", sanitize_key(key)))
    }
}

impl Default for FileKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a key onto a safe file name.
///
/// ASCII alphanumerics, `-` and `_` are kept; every other byte becomes
/// `%XX`. The mapping is injective, so distinct keys never share a file.
/// The empty key maps to a lone `%`, which no other key can produce.
fn sanitize_key(key: &str) -> String {
    if key.is_empty() {
        return "%".to_string();
    }

    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TrackerError::storage_read(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        if let Some(quota) = self.quota_bytes {
            if value.len() as u64 > quota {
                return Err(TrackerError::storage_write(
                    key,
                    format!("quota exceeded ({} of {} bytes)", value.len(), quota),
                ));
            }
        }

        fs::create_dir_all(&self.base_dir).map_err(|e| TrackerError::storage_write(key, e))?;

        let path = self.key_path(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).map_err(|e| TrackerError::storage_write(key, e))?;
        fs::rename(&tmp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            TrackerError::storage_write(key, e)
        })?;

        Ok(())
    }

    fn remove(&self, key: &str) -> TrackerResult<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TrackerError::storage_write(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("simRegistrosInexactitud"), "simRegistrosInexactitud");
        assert_eq!(sanitize_key("team/a b"), "team%2Fa%20b");
        assert_eq!(sanitize_key("../../etc/passwd"), "%2E%2E%2F%2E%2E%2Fetc%2Fpasswd");
        assert_eq!(sanitize_key("año"), "a%C3%B1o");
        assert_eq!(sanitize_key(""), "%");
    }

    #[test]
    fn test_sanitize_key_keeps_keys_apart() {
        let keys = ["team.a", "team_a", "team%2Ea", "team a", "_", "%", ""];
        let names: std::collections::HashSet<String> = keys.iter().map(|k| sanitize_key(k)).collect();
        assert_eq!(names.len(), keys.len());
    }

    #[test]
    fn test_key_path_stays_in_base_dir() {
        let store = FileKeyValueStore::with_base_dir("/tmp/tracker-data");
        let path = store.key_path("../escape");
        assert_eq!(path.parent(), Some(Path::new("/tmp/tracker-data")));
    }
}
