//! Core business logic
//!
//! The record store and its persistence adapter. Neither touches disk or
//! network directly; both go through the `KeyValueStore` trait.

pub mod persistence;
pub mod store;

pub use persistence::PersistenceAdapter;
pub use store::{RecordStore, summarize};
