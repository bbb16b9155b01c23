//! Shared error types for the complaint-rate tracker

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Invalid metrics: orders = {orders}, complaints = {complaints} (orders must be a whole number > 0, complaints a whole number >= 0)")]
    InvalidMetrics { orders: String, complaints: String },

    #[error("Label is empty")]
    EmptyLabel,

    #[error("Invalid UUID: {input}")]
    InvalidUuid { input: String },
}

impl SharedError {
    pub fn invalid_metrics(orders: impl ToString, complaints: impl ToString) -> Self {
        SharedError::InvalidMetrics {
            orders: orders.to_string(),
            complaints: complaints.to_string(),
        }
    }

    /// True for the errors a user can fix by correcting their input
    pub fn is_validation(&self) -> bool {
        matches!(self, SharedError::InvalidMetrics { .. } | SharedError::EmptyLabel)
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
