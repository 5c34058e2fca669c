//! Output formatting for quiz rounds.
//!
//! This module handles rendering for the interactive binary:
//! - [`terminal`] - colored prompts and verdicts
//! - [`csv`] - one summary row per round
//! - [`json`] - problems as JSON

mod csv;
mod json;
mod terminal;

pub use csv::{csv_header, round_row, RoundSummary};
pub use json::problem_json;
pub use terminal::{format_field, grade_line, problem_banner, reveal_line, subnet_details};
