//! Tests for HttpConfigSource against a local mock server

use std::time::Duration;

use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::{DEFAULT_STORAGE_KEY, TrackerConfig, load_config};
use crate::error::TrackerError;
use crate::services::HttpConfigSource;
use crate::traits::ConfigSource;
use shared::Thresholds;

fn source_for(server: &MockServer, route: &str) -> HttpConfigSource {
    let url = Url::parse(&format!("{}{}", server.uri(), route)).unwrap();
    HttpConfigSource::with_timeout(url, Duration::from_millis(500))
}

#[tokio::test]
async fn test_fetches_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"okThreshold": 2, "warnThreshold": 4}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = load_config(&source_for(&server, "/config.json")).await;

    assert_eq!(config.thresholds, Thresholds::new(2.0, 4.0));
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
}

#[tokio::test]
async fn test_not_found_is_absent_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = source_for(&server, "/config.json");
    assert_eq!(source.fetch().await.unwrap(), None);
}

#[tokio::test]
async fn test_server_error_falls_back_to_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = source_for(&server, "/config.json");
    assert!(matches!(source.fetch().await, Err(TrackerError::ConfigLoadError { .. })));
    assert_eq!(load_config(&source).await, TrackerConfig::default());
}

#[tokio::test]
async fn test_slow_server_times_out_to_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"okThreshold": 9}"#)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = load_config(&source_for(&server, "/config.json")).await;
    assert_eq!(config, TrackerConfig::default());
}

#[tokio::test]
async fn test_unreachable_host_falls_back_to_defaults() {
    // Port 9 (discard) on localhost is almost never listening
    let url = Url::parse("http://127.0.0.1:9/config.json").unwrap();
    let source = HttpConfigSource::with_timeout(url, Duration::from_millis(200));

    assert_eq!(load_config(&source).await, TrackerConfig::default());
}
