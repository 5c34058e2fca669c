//! Classful address classification.
//!
//! The class is decided by the most-significant octet alone and never by a
//! prefix length.

use super::ipv4::{first_octet, PrefixLength};
use crate::error::{QuizError, QuizResult};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Historical IPv4 address class.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressClass {
    A,
    B,
    C,
    /// Multicast, 224-239.
    D,
    /// Experimental. `classify` reports 240-255 as [`AddressClass::Unknown`];
    /// this variant only exists so the class letter can be read and written.
    E,
    /// First octet 0, 127 or 240-255.
    Unknown,
}

impl AddressClass {
    /// The fixed high-order bits that identify the class.
    pub fn leading_bits(self) -> Option<&'static str> {
        match self {
            AddressClass::A => Some("0"),
            AddressClass::B => Some("10"),
            AddressClass::C => Some("110"),
            AddressClass::D => Some("1110"),
            AddressClass::E => Some("1111"),
            AddressClass::Unknown => None,
        }
    }

    /// Default (classful) mask length. Only A, B and C have one.
    pub fn default_prefix(self) -> Option<PrefixLength> {
        let len = match self {
            AddressClass::A => 8,
            AddressClass::B => 16,
            AddressClass::C => 24,
            _ => return None,
        };
        PrefixLength::new(len).ok()
    }

    /// Number of leading octets that belong to the network in classful mode.
    pub fn network_octets(self) -> Option<usize> {
        self.default_prefix().map(|p| (p.bits() / 8) as usize)
    }

    /// A, B and C are the only classes used in the quiz.
    pub fn is_quiz_eligible(self) -> bool {
        self.default_prefix().is_some()
    }

    pub fn letter(self) -> Option<char> {
        match self {
            AddressClass::A => Some('A'),
            AddressClass::B => Some('B'),
            AddressClass::C => Some('C'),
            AddressClass::D => Some('D'),
            AddressClass::E => Some('E'),
            AddressClass::Unknown => None,
        }
    }
}

impl std::fmt::Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.letter() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "Unknown"),
        }
    }
}

impl FromStr for AddressClass {
    type Err = ();

    /// Case-sensitive: only the uppercase letters A-E are classes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(AddressClass::A),
            "B" => Ok(AddressClass::B),
            "C" => Ok(AddressClass::C),
            "D" => Ok(AddressClass::D),
            "E" => Ok(AddressClass::E),
            _ => Err(()),
        }
    }
}

/// Classify an address by its first octet.
///
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_quiz::models::{classify, AddressClass};
/// assert_eq!(classify(Ipv4Addr::new(211, 17, 48, 246)), AddressClass::C);
/// assert_eq!(classify(Ipv4Addr::new(127, 0, 0, 1)), AddressClass::Unknown);
/// ```
pub fn classify(addr: Ipv4Addr) -> AddressClass {
    match first_octet(addr) {
        1..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        _ => AddressClass::Unknown,
    }
}

/// Classify an address that must be A, B or C.
pub fn classify_classful(addr: Ipv4Addr) -> QuizResult<AddressClass> {
    let class = classify(addr);
    if class.is_quiz_eligible() {
        Ok(class)
    } else {
        log::debug!("{addr} is class {class}, not usable as a classful address");
        Err(QuizError::UnsupportedClass {
            address: addr.to_string(),
            class,
        })
    }
}
