//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::classifier::{classify, compute_percentage};
use crate::errors::{SharedError, SharedResult};

/// Largest integer an f64 represents exactly
const MAX_EXACT_COUNT: f64 = 9_007_199_254_740_991.0;

/// Unique identifier for a tracker session
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> SharedResult<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidUuid { input: s.to_string() })
    }

    /// First block of the UUID, enough to tell sessions apart in logs
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification tier of a complaint percentage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ok,
    Review,
    Critical,
    Invalid,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Review => "REVIEW",
            Status::Critical => "CRITICAL",
            Status::Invalid => "INVALID",
        }
    }

    /// Semantic tag a view uses to colour the status
    pub fn display_tag(&self) -> &'static str {
        match self {
            Status::Ok => "success",
            Status::Review => "warning",
            Status::Critical => "danger",
            Status::Invalid => "secondary",
        }
    }

    /// Bootstrap badge classes for HTML views
    pub fn badge_class(&self) -> &'static str {
        match self {
            Status::Ok => "badge text-bg-success badge-round",
            Status::Review => "badge text-bg-warning text-dark badge-round",
            Status::Critical => "badge text-bg-danger badge-round",
            Status::Invalid => "badge text-bg-secondary badge-round",
        }
    }

    /// Rank of the tier, higher is worse. `Invalid` has no rank.
    pub fn severity(&self) -> Option<u8> {
        match self {
            Status::Ok => Some(0),
            Status::Review => Some(1),
            Status::Critical => Some(2),
            Status::Invalid => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two classification thresholds, in percent
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub ok: f64,
    pub warn: f64,
}

impl Thresholds {
    pub const DEFAULT_OK: f64 = 1.0;
    pub const DEFAULT_WARN: f64 = 2.5;

    pub fn new(ok: f64, warn: f64) -> Self {
        Self { ok, warn }
    }

    pub fn classify(&self, percentage: Option<f64>) -> Status {
        classify(percentage, self.ok, self.warn)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ok: Self::DEFAULT_OK,
            warn: Self::DEFAULT_WARN,
        }
    }
}

/// One observation of order and complaint counts.
///
/// The percentage and status are derived once when the record is built and
/// cannot be changed afterwards; rebuild the record to reclassify it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    label: String,
    order_count: u64,
    complaint_count: u64,
    percentage: f64,
    status: Status,
}

impl Record {
    /// Build a record from whole-number counts
    pub fn new(label: &str, orders: u64, complaints: u64, thresholds: &Thresholds) -> SharedResult<Self> {
        let label = label.trim();
        if label.is_empty() {
            return Err(SharedError::EmptyLabel);
        }

        let percentage = compute_percentage(orders as f64, complaints as f64)
            .ok_or_else(|| SharedError::invalid_metrics(orders, complaints))?;

        Ok(Self {
            label: label.to_string(),
            order_count: orders,
            complaint_count: complaints,
            percentage,
            status: thresholds.classify(Some(percentage)),
        })
    }

    /// Build a record from raw numeric input, as typed into a form
    pub fn from_input(label: &str, orders: f64, complaints: f64, thresholds: &Thresholds) -> SharedResult<Self> {
        if label.trim().is_empty() {
            return Err(SharedError::EmptyLabel);
        }

        if compute_percentage(orders, complaints).is_none()
            || !is_whole_count(orders)
            || !is_whole_count(complaints)
        {
            return Err(SharedError::invalid_metrics(orders, complaints));
        }

        Self::new(label, orders as u64, complaints as u64, thresholds)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn order_count(&self) -> u64 {
        self.order_count
    }

    pub fn complaint_count(&self) -> u64 {
        self.complaint_count
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

fn is_whole_count(value: f64) -> bool {
    value.fract() == 0.0 && value <= MAX_EXACT_COUNT
}

/// Aggregate over a whole record collection
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Summary {
    /// The collection is empty. Distinct from a zero complaint rate.
    NoData,
    #[serde(rename_all = "camelCase")]
    Totals {
        total_orders: u64,
        total_complaints: u64,
        global_percentage: Option<f64>,
        global_status: Status,
    },
}

impl Summary {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Summary::NoData)
    }

    pub fn global_status(&self) -> Option<Status> {
        match self {
            Summary::NoData => None,
            Summary::Totals { global_status, .. } => Some(*global_status),
        }
    }
}
