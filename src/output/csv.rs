//! CSV summary rows for finished rounds.
//!
//! The library keeps no history; the binary prints one row per round and
//! the caller decides where stdout goes.

use super::terminal::format_field;
use crate::models::{Grade, ProblemInstance};
use chrono::{DateTime, Utc};

/// Result of one round as printed in the CSV row.
#[derive(Debug, Clone)]
pub struct RoundSummary<'a> {
    pub problem: &'a ProblemInstance,
    pub grades: &'a [Grade],
    pub finished_at: DateTime<Utc>,
}

impl RoundSummary<'_> {
    pub fn score(&self) -> usize {
        self.grades.iter().filter(|g| g.correct).count()
    }
}

pub fn csv_header() -> String {
    [
        "finished_at",
        "mode",
        "ip_address",
        "prefix",
        "class",
        "score",
    ]
    .iter()
    .map(|h| format_field(h, 0))
    .collect::<Vec<String>>()
    .join(",")
}

/// Single CSV row for a round.
pub fn round_row(summary: &RoundSummary) -> String {
    format!(
        "{finished_at},{mode},{ip},{prefix},{class},{score}",
        finished_at = format_field(summary.finished_at.format("%Y-%m-%dT%H:%M:%SZ"), 22),
        mode = format_field(format!("{:?}", summary.problem.mode), 12),
        ip = format_field(summary.problem.address(), 17),
        prefix = format_field(summary.problem.prefix(), 4),
        class = format_field(summary.problem.class, 3),
        score = format_field(
            format!("{}/{}", summary.score(), summary.grades.len()),
            5
        ),
    )
}
