//! Tests for FileConfigSource

use tokio::fs;

use crate::config::{TrackerConfig, load_config};
use crate::error::TrackerError;
use crate::services::FileConfigSource;
use crate::traits::ConfigSource;
use shared::Thresholds;

#[tokio::test]
async fn test_missing_file_is_absent_document() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileConfigSource::new(dir.path().join("tracker.json"));

    assert_eq!(source.fetch().await.unwrap(), None);
    assert_eq!(load_config(&source).await, TrackerConfig::default());
}

#[tokio::test]
async fn test_reads_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracker.json");
    fs::write(&path, r#"{"okThreshold": 0.5, "warnThreshold": 1.5, "storageKey": "qa"}"#)
        .await
        .unwrap();

    let source = FileConfigSource::new(&path);
    let config = load_config(&source).await;

    assert_eq!(config.thresholds, Thresholds::new(0.5, 1.5));
    assert_eq!(config.storage_key, "qa");
    assert_eq!(source.describe(), path.display().to_string());
}

#[tokio::test]
async fn test_directory_path_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileConfigSource::new(dir.path());

    let result = source.fetch().await;
    assert!(matches!(result, Err(TrackerError::ConfigLoadError { .. })));
    assert_eq!(load_config(&source).await, TrackerConfig::default());
}

#[tokio::test]
async fn test_garbage_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracker.json");
    fs::write(&path, "okThreshold = 3").await.unwrap();

    let config = load_config(&FileConfigSource::new(&path)).await;
    assert_eq!(config, TrackerConfig::default());
}
