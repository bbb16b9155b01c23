//! Complaint percentage and status classification
//!
//! Pure functions, no state. Thresholds are passed in by the caller.

use crate::types::Status;

/// Complaints as a percentage of orders, rounded to 2 decimals.
///
/// Returns `None` when either input is non-finite, `orders <= 0` or
/// `complaints < 0`.
pub fn compute_percentage(orders: f64, complaints: f64) -> Option<f64> {
    if !orders.is_finite() || !complaints.is_finite() || orders <= 0.0 || complaints < 0.0 {
        return None;
    }
    Some(round_to_hundredths(complaints / orders * 100.0))
}

/// Map a percentage onto a status tier. A value exactly at a threshold
/// belongs to the lower tier.
pub fn classify(percentage: Option<f64>, ok_threshold: f64, warn_threshold: f64) -> Status {
    match percentage {
        None => Status::Invalid,
        Some(pct) if pct <= ok_threshold => Status::Ok,
        Some(pct) if pct <= warn_threshold => Status::Review,
        Some(_) => Status::Critical,
    }
}

// Half away from zero; inputs here are never negative
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
