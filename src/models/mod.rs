//! Domain models for the addressing quiz.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`ipv4`] - address parsing, [`PrefixLength`] and [`Cidr`]
//! - [`class`] - classful [`AddressClass`] and [`classify`]
//! - [`question`] - [`QuestionKind`], [`Answer`] and [`Grade`]
//! - [`problem`] - [`QuizMode`] and [`ProblemInstance`]

mod class;
mod ipv4;
mod problem;
mod question;

// Re-export public types
pub use class::{classify, classify_classful, AddressClass};
pub use ipv4::{
    first_octet, format_address, parse_address, Cidr, PrefixLength, MAX_LENGTH,
    MAX_SUBNETTING_LENGTH,
};
pub use problem::{ProblemInstance, QuizMode};
pub use question::{Answer, Grade, QuestionKind};
