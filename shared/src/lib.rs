//! Shared types for the complaint-rate tracker
//!
//! Contains the record data model, the classifier and the logging utilities
//! used by the tracker engine and any view layer built on top of it.

pub mod classifier;
pub mod errors;
pub mod logging;
pub mod types;

pub use classifier::{classify, compute_percentage};
pub use errors::*;
pub use types::*;
