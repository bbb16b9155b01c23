//! Engine configuration: classification thresholds and storage key
//!
//! Loaded once at startup from an optional JSON document:
//!
//! ```json
//! { "okThreshold": 1.0, "warnThreshold": 2.5, "storageKey": "simRegistrosInexactitud" }
//! ```
//!
//! Every field is optional and defaults on its own. Unknown fields are
//! ignored. Any failure to fetch or parse the document yields the defaults.

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::traits::ConfigSource;
use shared::Thresholds;

/// Storage key used when the configuration does not name one
pub const DEFAULT_STORAGE_KEY: &str = "simRegistrosInexactitud";

/// Process-wide configuration, immutable after startup
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub thresholds: Thresholds,
    pub storage_key: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument {
    ok_threshold: Option<f64>,
    warn_threshold: Option<f64>,
    storage_key: Option<String>,
}

impl TrackerConfig {
    /// Parse a configuration document, defaulting each missing field
    pub fn from_document(raw: &str) -> TrackerResult<Self> {
        let document: ConfigDocument = serde_json::from_str(raw)?;
        let defaults = Self::default();

        let storage_key = match document.storage_key {
            Some(key) if !key.trim().is_empty() => key.trim().to_string(),
            Some(_) => {
                warn!("Ignoring blank storageKey, using '{}'", defaults.storage_key);
                defaults.storage_key
            }
            None => defaults.storage_key,
        };

        let config = Self {
            thresholds: Thresholds::new(
                document.ok_threshold.unwrap_or(defaults.thresholds.ok),
                document.warn_threshold.unwrap_or(defaults.thresholds.warn),
            ),
            storage_key,
        };

        if config.thresholds.ok > config.thresholds.warn {
            warn!(
                "okThreshold {} is above warnThreshold {}; REVIEW can never be reached",
                config.thresholds.ok, config.thresholds.warn
            );
        }

        Ok(config)
    }
}

/// Load configuration from `source`, never failing.
///
/// An absent document silently yields the defaults. Fetch or parse failures
/// are logged as a `ConfigLoadError` and also yield the defaults.
pub async fn load_config(source: &dyn ConfigSource) -> TrackerConfig {
    match try_load_config(source).await {
        Ok(Some(config)) => {
            info!(
                "Loaded configuration from {} (ok <= {}, warn <= {}, key '{}')",
                source.describe(),
                config.thresholds.ok,
                config.thresholds.warn,
                config.storage_key
            );
            config
        }
        Ok(None) => {
            debug!("No configuration at {}, using defaults", source.describe());
            TrackerConfig::default()
        }
        Err(e) => {
            warn!("{e}; using default configuration");
            TrackerConfig::default()
        }
    }
}

/// Strict variant of [`load_config`] for callers that want to see the failure
pub async fn try_load_config(source: &dyn ConfigSource) -> TrackerResult<Option<TrackerConfig>> {
    let Some(raw) = source.fetch().await? else {
        return Ok(None);
    };

    TrackerConfig::from_document(&raw)
        .map(Some)
        .map_err(|e| TrackerError::config_load(source.describe(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockConfigSource;

    fn source_returning(result: TrackerResult<Option<String>>) -> MockConfigSource {
        let mut source = MockConfigSource::new();
        let mut result = Some(result);
        source
            .expect_fetch()
            .times(1)
            .returning(move || result.take().unwrap_or(Ok(None)));
        source.expect_describe().returning(|| "mock://config".to_string());
        source
    }

    #[test]
    fn test_full_document() {
        let config = TrackerConfig::from_document(
            r#"{"okThreshold": 2.0, "warnThreshold": 5.0, "storageKey": "team-a"}"#,
        )
        .unwrap();

        assert_eq!(config.thresholds, Thresholds::new(2.0, 5.0));
        assert_eq!(config.storage_key, "team-a");
    }

    #[test]
    fn test_fields_default_independently() {
        let config = TrackerConfig::from_document(r#"{"warnThreshold": 4.0}"#).unwrap();
        assert_eq!(config.thresholds.ok, 1.0);
        assert_eq!(config.thresholds.warn, 4.0);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);

        let config = TrackerConfig::from_document(r#"{"storageKey": "other"}"#).unwrap();
        assert_eq!(config.thresholds, Thresholds::default());
        assert_eq!(config.storage_key, "other");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let config = TrackerConfig::from_document(r#"{"okThreshold": 0.5, "theme": "dark"}"#).unwrap();
        assert_eq!(config.thresholds.ok, 0.5);
    }

    #[test]
    fn test_blank_storage_key_defaults() {
        let config = TrackerConfig::from_document(r#"{"storageKey": "   "}"#).unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_malformed_documents_fail_to_parse() {
        assert!(TrackerConfig::from_document("not json").is_err());
        assert!(TrackerConfig::from_document(r#"{"okThreshold": "high"}"#).is_err());
        assert!(TrackerConfig::from_document("null").is_err());
        assert!(TrackerConfig::from_document("[]").is_err());
    }

    #[test]
    fn test_inverted_thresholds_are_accepted() {
        let config = TrackerConfig::from_document(r#"{"okThreshold": 3.0}"#).unwrap();
        assert_eq!(config.thresholds, Thresholds::new(3.0, 2.5));
    }

    #[tokio::test]
    async fn test_load_config_absent_document_uses_defaults() {
        let source = source_returning(Ok(None));
        assert_eq!(load_config(&source).await, TrackerConfig::default());
    }

    #[tokio::test]
    async fn test_load_config_fetch_failure_uses_defaults() {
        let source = source_returning(Err(TrackerError::config_load("mock://config", "connection refused")));
        assert_eq!(load_config(&source).await, TrackerConfig::default());
    }

    #[tokio::test]
    async fn test_load_config_parse_failure_uses_defaults() {
        let source = source_returning(Ok(Some("{\"okThreshold\": ".to_string())));
        assert_eq!(load_config(&source).await, TrackerConfig::default());
    }

    #[tokio::test]
    async fn test_try_load_config_reports_parse_failure() {
        let source = source_returning(Ok(Some("{broken".to_string())));
        let result = try_load_config(&source).await;
        assert!(matches!(result, Err(TrackerError::ConfigLoadError { .. })));
    }

    #[tokio::test]
    async fn test_load_config_applies_document() {
        let source = source_returning(Ok(Some(r#"{"okThreshold": 1.5}"#.to_string())));
        let config = load_config(&source).await;
        assert_eq!(config.thresholds, Thresholds::new(1.5, 2.5));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }
}
