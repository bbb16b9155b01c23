//! Terminal view layer
//!
//! Renders the record table and the summary, and owns the confirmation
//! prompts. Nothing here mutates records; `main` calls the session only
//! after a confirmation succeeds.

use std::io::{self, BufRead, Write};

use shared::{Record, SharedError, Status, Summary};

use crate::error::TrackerError;
use crate::traits::Confirm;

/// Placeholder shown for summary fields when there is no data
pub const NO_DATA: &str = "—";

/// Sample rows offered by the `seed-demo` command
pub const DEMO_RECORDS: [(&str, u64, u64); 2] = [("Example Morning", 500, 5), ("Example Afternoon", 420, 12)];

/// Parse a count typed by the user. Blank or non-numeric input is `None`.
pub fn parse_metric(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

/// Status text, wrapped in an ANSI colour matching its display tag
fn status_cell(status: Status, color: bool) -> String {
    if !color {
        return status.label().to_string();
    }
    let code = match status.display_tag() {
        "success" => "32",
        "warning" => "33",
        "danger" => "31",
        _ => "90",
    };
    format!("\x1b[{code}m{}\x1b[0m", status.label())
}

/// Render the records as a table; positions are 1-based
pub fn render_table(records: &[Record], color: bool) -> String {
    if records.is_empty() {
        return "No records yet.\n".to_string();
    }

    let label_width = records
        .iter()
        .map(|r| r.label().chars().count())
        .max()
        .unwrap_or(0)
        .max("Label".len());

    let mut out = format!(
        "{:>3}  {:<label_width$}  {:>10}  {:>10}  {:>9}  {}\n",
        "#", "Label", "Orders", "Complaints", "%", "Status"
    );
    for (index, record) in records.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<label_width$}  {:>10}  {:>10}  {:>9}  {}\n",
            index + 1,
            record.label(),
            record.order_count(),
            record.complaint_count(),
            format_percentage(record.percentage()),
            status_cell(record.status(), color)
        ));
    }
    out
}

pub fn render_summary(summary: &Summary, color: bool) -> String {
    match summary {
        Summary::NoData => format!(
            "Orders: {NO_DATA}\nComplaints: {NO_DATA}\nGlobal %: {NO_DATA}\nStatus: {NO_DATA}\n"
        ),
        Summary::Totals {
            total_orders,
            total_complaints,
            global_percentage,
            global_status,
        } => format!(
            "Orders: {}\nComplaints: {}\nGlobal %: {}\nStatus: {}\n",
            total_orders,
            total_complaints,
            global_percentage.map(format_percentage).unwrap_or_else(|| NO_DATA.to_string()),
            status_cell(*global_status, color)
        ),
    }
}

/// True when `err` is bad user input, which is reported once to the user
/// rather than logged as a failure
pub fn is_input_error(err: &anyhow::Error) -> bool {
    if let Some(e) = err.downcast_ref::<TrackerError>() {
        return e.is_validation();
    }
    err.downcast_ref::<SharedError>()
        .is_some_and(SharedError::is_validation)
}

/// Confirmation by reading a y/N answer from stdin
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "{prompt} [y/N] ");
        let _ = stderr.flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

/// Confirmation that always agrees, for `--yes`
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
