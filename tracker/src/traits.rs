//! Service trait definitions for dependency injection
//!
//! Storage, configuration fetching and user confirmation are abstracted
//! through these traits so the engine can be tested without disk, network
//! or a terminal.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::TrackerResult;

/// String key-value storage, the analogue of browser local storage
#[mockall::automock]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when the key is absent
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> TrackerResult<()>;

    /// Delete `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> TrackerResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> TrackerResult<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> TrackerResult<()> {
        (**self).remove(key)
    }
}

/// Source of the optional configuration document
#[mockall::automock]
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Fetch the raw document.
    ///
    /// # Returns
    /// `Ok(None)` when no document exists at the source, which is not an
    /// error; `Err` for transport or read failures.
    async fn fetch(&self) -> TrackerResult<Option<String>>;

    /// Human-readable location used in logs and errors
    fn describe(&self) -> String;
}

/// Confirmation step owned by the view layer.
///
/// The engine never asks; a view decides and only then calls the mutation.
#[mockall::automock]
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}
