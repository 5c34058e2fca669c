//! Answer validation.
//!
//! Every candidate first has all whitespace removed. Non-strict kinds (masks
//! and numbers) are also uppercased; strict kinds (class letter, leading bit
//! pattern, address maps) keep their case, so `c` is not class `C` and
//! `n.n.n.h` is not a map.
//!
//! Candidates that cannot be read at all fail with an error (`NotANumber`,
//! `InvalidMask`, `MalformedAddress`) so the caller can tell "please enter a
//! number" apart from "incorrect".

use super::address_map::AddressMap;
use super::mask::{is_contiguous_subnet, is_contiguous_wildcard};
use crate::error::{QuizError, QuizResult};
use crate::models::{parse_address, AddressClass, Answer, Grade, QuestionKind};
use lazy_static::lazy_static;
use regex::Regex;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Leading bit patterns that are quizzed (classes D and E are not).
pub const QUIZZED_BIT_PATTERNS: [&str; 3] = ["0", "10", "110"];

lazy_static! {
    static ref ABSTRACT_NATIVE_MAP: Regex =
        Regex::new(r"^(N\.H\.H\.H|N\.N\.H\.H|N\.N\.N\.H)$").expect("Invalid Regex?");
    /// One, two or three resolved leading octets: class A, B or C.
    static ref RESOLVED_NATIVE_MAP: [Regex; 3] = [
        Regex::new(r"^\d{1,3}\.H\.H\.H$").expect("Invalid Regex?"),
        Regex::new(r"^\d{1,3}\.\d{1,3}\.H\.H$").expect("Invalid Regex?"),
        Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.H$").expect("Invalid Regex?"),
    ];
}

/// Apply the kind's normalization and check the candidate can be read.
pub fn normalize(kind: QuestionKind, candidate: &str) -> QuizResult<String> {
    let mut text: String = candidate.chars().filter(|c| !c.is_whitespace()).collect();
    if !kind.is_strict() {
        text = text.to_uppercase();
    }
    log::trace!("normalize({kind:?}, {candidate:?}) -> {text:?}");

    match kind {
        QuestionKind::SubnetMask | QuestionKind::WildcardMask => {
            let addr = parse_address(&text)?;
            let bits = u32::from(addr);
            let contiguous = if kind == QuestionKind::SubnetMask {
                is_contiguous_subnet(bits)
            } else {
                is_contiguous_wildcard(bits)
            };
            if !contiguous {
                return Err(QuizError::InvalidMask(addr.to_string()));
            }
            Ok(addr.to_string())
        }
        QuestionKind::NetworkBitCount | QuestionKind::HostBitCount | QuestionKind::PrefixLength => {
            let digits = number_text(kind, &text);
            match digits.parse::<i64>() {
                Ok(n) => Ok(n.to_string()),
                // still a number, just one no answer can equal
                Err(e)
                    if matches!(
                        e.kind(),
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                    ) =>
                {
                    Ok(digits.to_string())
                }
                Err(_) => Err(QuizError::NotANumber(candidate.to_string())),
            }
        }
        QuestionKind::LeadingBitPattern => {
            if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
                return Err(QuizError::NotANumber(candidate.to_string()));
            }
            Ok(text)
        }
        QuestionKind::AddressClass
        | QuestionKind::NativeAddressMap
        | QuestionKind::SubnetAddressMap => Ok(text),
    }
}

/// Numeric text without the `/` a prefix length may be written with.
fn number_text(kind: QuestionKind, text: &str) -> &str {
    match kind {
        QuestionKind::PrefixLength => text.strip_prefix('/').unwrap_or(text),
        _ => text,
    }
}

/// Grade a free-text candidate against an answer.
///
/// `Ok(false)` is a readable but wrong answer; `Err` means the candidate
/// could not be read for this kind.
pub fn validate(kind: QuestionKind, candidate: &str, answer: &Answer) -> QuizResult<bool> {
    let normalized = normalize(kind, candidate)?;
    Ok(matches_answer(kind, &normalized, answer))
}

/// Like [`validate`] but also reports the normalized candidate and the
/// canonical answer.
pub fn grade_answer(kind: QuestionKind, candidate: &str, answer: &Answer) -> QuizResult<Grade> {
    let normalized = normalize(kind, candidate)?;
    let correct = matches_answer(kind, &normalized, answer);
    log::debug!(
        "grade {kind:?}: {normalized:?} vs {canonical:?} -> {correct}",
        canonical = answer.canonical
    );
    Ok(Grade {
        kind,
        correct,
        normalized_candidate: normalized,
        canonical: answer.canonical.clone(),
    })
}

/// Compare an already normalized candidate.
fn matches_answer(kind: QuestionKind, normalized: &str, answer: &Answer) -> bool {
    match kind {
        QuestionKind::SubnetMask | QuestionKind::WildcardMask => {
            // normalized is already dotted-decimal, compare numerically
            let Ok(candidate) = parse_address(normalized) else {
                return false;
            };
            answer
                .accepted()
                .filter_map(|a| parse_address(a).ok())
                .any(|a| a == candidate)
        }
        QuestionKind::NetworkBitCount | QuestionKind::HostBitCount | QuestionKind::PrefixLength => {
            let Ok(candidate) = number_text(kind, normalized).parse::<i64>() else {
                return false;
            };
            answer
                .accepted()
                .filter_map(|a| number_text(kind, a.trim()).parse::<i64>().ok())
                .any(|a| a == candidate)
        }
        QuestionKind::AddressClass => {
            AddressClass::from_str(normalized).is_ok() && answer.accepted().any(|a| a == normalized)
        }
        QuestionKind::LeadingBitPattern => {
            QUIZZED_BIT_PATTERNS.contains(&normalized) && answer.accepted().any(|a| a == normalized)
        }
        QuestionKind::NativeAddressMap => matches_native_map(normalized, answer),
        QuestionKind::SubnetAddressMap => match normalized.parse::<AddressMap>() {
            Ok(map) => answer.accepted().any(|a| a == map.to_string()),
            Err(e) => {
                log::trace!("subnet map rejected: {e}");
                false
            }
        },
    }
}

fn matches_native_map(normalized: &str, answer: &Answer) -> bool {
    if normalized.contains(&['n', 'h'][..]) {
        return false;
    }
    if ABSTRACT_NATIVE_MAP.is_match(normalized) {
        return normalized == answer.canonical;
    }
    RESOLVED_NATIVE_MAP.iter().any(|shape| shape.is_match(normalized))
        && answer.accepted().any(|a| a == normalized)
}
