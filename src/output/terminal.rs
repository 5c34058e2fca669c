//! Terminal output utilities.

use crate::models::{Grade, ProblemInstance, QuestionKind};
use crate::processing::{broadcast_address, format_map, network_address, usable_hosts};
use crate::processing::{MapBoundary, MapStyle};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Header shown before the questions of a round.
pub fn problem_banner(problem: &ProblemInstance) -> String {
    format!("{}", problem.prompt().bold())
}

/// Verdict for one attempt, printed after the question prompt.
pub fn grade_line(grade: &Grade) -> String {
    if grade.correct {
        format!("{} {}", grade.normalized_candidate, "correct".green())
    } else {
        format!("{} {}", grade.normalized_candidate, "incorrect".red())
    }
}

/// Shown once all attempts at a question are used.
pub fn reveal_line(canonical: &str) -> String {
    format!("The answer was {}", canonical.yellow())
}

/// Network facts shown after a round, with the native map in `style`.
pub fn subnet_details(problem: &ProblemInstance, style: MapStyle) -> String {
    let prefix = problem.prefix();
    let addr = problem.address();
    let native = format_map(addr, MapBoundary::Classful, style).unwrap_or_else(|e| e.to_string());
    let subnet_map = problem
        .answer(QuestionKind::SubnetAddressMap)
        .map(|a| a.canonical.as_str())
        .unwrap_or("-");
    format!(
        "network {network}/{prefix}, broadcast {broadcast}, {hosts} usable hosts, \
         native {native}, map {subnet_map}",
        network = network_address(addr, prefix),
        broadcast = broadcast_address(addr, prefix),
        hosts = usable_hosts(prefix),
    )
}
