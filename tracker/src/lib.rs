//! Complaint-rate tracker library
//!
//! Records order/complaint observations, classifies each one against two
//! configurable thresholds, keeps the collection mirrored in key-value
//! storage and summarizes it. A view layer (the `tracker` binary) drives
//! it through [`TrackerSession`].

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod session;
pub mod traits;
pub mod view;

// Re-export main types
pub use config::{DEFAULT_STORAGE_KEY, TrackerConfig, load_config, try_load_config};
pub use core::{PersistenceAdapter, RecordStore, summarize};
pub use error::{TrackerError, TrackerResult};
pub use session::TrackerSession;

// Re-export trait definitions
pub use traits::{ConfigSource, Confirm, KeyValueStore};

// Re-export service implementations
pub use services::{
    FileConfigSource, FileKeyValueStore, HttpConfigSource, MemoryKeyValueStore, config_source_for,
};
