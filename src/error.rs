//! Error types for the addressing calculus.
//!
//! Every failure is returned to the caller as a [`QuizError`]; nothing in the
//! library is fatal and the caller is expected to re-prompt the user.

use crate::models::{AddressClass, QuestionKind};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type QuizResult<T> = Result<T, QuizError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Dotted-decimal text that is not four octets in [0,255].
    #[error("malformed IPv4 address: {0:?}")]
    MalformedAddress(String),

    /// Prefix outside [0,32], or outside the subnetting range of a class.
    #[error("invalid prefix length /{prefix}: {reason}")]
    InvalidPrefixLength { prefix: u32, reason: String },

    /// Mask whose bits are not one contiguous run.
    #[error("invalid mask {0:?}")]
    InvalidMask(String),

    /// Numeric question answered with something that is not an integer.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// Address outside the A/B/C ranges where a classful address is required.
    #[error("unsupported address class {class} for {address}")]
    UnsupportedClass { address: String, class: AddressClass },

    /// Per-bit address map that is not four groups of eight `N`/`S`/`H`.
    #[error("malformed address map: {0:?}")]
    MalformedAddressMap(String),

    /// Octet drill answer that is not 1-8 binary digits.
    #[error("malformed binary octet: {0:?}")]
    MalformedBinary(String),

    #[error("problem has no canonical answer for {0}")]
    MissingAnswer(QuestionKind),
}

impl QuizError {
    /// True when the candidate text could not be read at all, as opposed to
    /// being a well-formed but wrong answer.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            QuizError::MalformedAddress(_)
                | QuizError::InvalidMask(_)
                | QuizError::NotANumber(_)
                | QuizError::MalformedAddressMap(_)
                | QuizError::MalformedBinary(_)
        )
    }
}
