//! IPv4 addressing quiz core.
//!
//! Generates classful and subnetting problems and grades free-text answers
//! about address classes, masks and address maps. Everything here is a pure
//! function except problem generation, which takes the caller's rng.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use subnet_quiz::models::{QuestionKind, QuizMode};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let problem = subnet_quiz::generate_problem(QuizMode::Classful, &mut rng).unwrap();
//! let canonical = problem.answer(QuestionKind::SubnetMask).unwrap().canonical.clone();
//! let grade = subnet_quiz::grade(&problem, QuestionKind::SubnetMask, &canonical).unwrap();
//! assert!(grade.correct);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod session;

use models::{Grade, ProblemInstance, QuestionKind};
use processing::{MapBoundary, MapStyle};
use std::net::Ipv4Addr;

pub use error::{QuizError, QuizResult};
pub use processing::generate_problem;

/// Grade one answer against a problem.
///
/// Unreadable answers are returned as errors (`NotANumber`, `InvalidMask`,
/// `MalformedAddress`) rather than as an incorrect grade.
pub fn grade(problem: &ProblemInstance, kind: QuestionKind, candidate: &str) -> QuizResult<Grade> {
    let answer = problem.answer(kind)?;
    processing::grade_answer(kind, candidate, answer)
}

/// Render the address map of an address for display.
pub fn render_map(addr: Ipv4Addr, boundary: MapBoundary, style: MapStyle) -> QuizResult<String> {
    processing::format_map(addr, boundary, style)
}
