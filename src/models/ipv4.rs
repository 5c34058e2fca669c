//! IPv4 address parsing and CIDR prefix handling.
//!
//! Provides [`parse_address`] for dotted-decimal text, the validated
//! [`PrefixLength`] and the [`Cidr`] pair of address and prefix.

use crate::error::{QuizError, QuizResult};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Longest prefix handed out in subnetting exercises; /31 and /32 leave no
/// usable host range.
pub const MAX_SUBNETTING_LENGTH: u8 = 30;

/// Parse dotted-decimal text into an address.
///
/// Exactly four tokens of ascii digits, each in [0,255]. Leading zeros are
/// accepted and dropped (`"010.0.0.1"` is `10.0.0.1`); signs, empty tokens and
/// inner whitespace are not. Surrounding whitespace is trimmed.
///
/// # Examples
/// ```
/// use subnet_quiz::models::parse_address;
/// assert_eq!(parse_address("211.17.48.246").unwrap().octets(), [211, 17, 48, 246]);
/// assert!(parse_address("10.0.0.256").is_err());
/// ```
pub fn parse_address(text: &str) -> QuizResult<Ipv4Addr> {
    let malformed = || QuizError::MalformedAddress(text.to_string());
    let tokens: Vec<&str> = text.trim().split('.').collect();
    if tokens.len() != 4 {
        return Err(malformed());
    }

    let mut octets = [0u8; 4];
    for (octet, token) in octets.iter_mut().zip(tokens) {
        *octet = parse_octet(token).ok_or_else(malformed)?;
    }
    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = token.trim_start_matches('0');
    if digits.is_empty() {
        return Some(0);
    }
    if digits.len() > 3 {
        return None;
    }
    digits.parse::<u16>().ok().and_then(|v| u8::try_from(v).ok())
}

/// Render an address in canonical dotted-decimal form.
pub fn format_address(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Most-significant octet of an address.
pub fn first_octet(addr: Ipv4Addr) -> u8 {
    (u32::from(addr) >> 24) as u8
}

/// A CIDR prefix length in [0,32].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PrefixLength(u8);

impl PrefixLength {
    pub const FULL: PrefixLength = PrefixLength(MAX_LENGTH);

    pub fn new(len: u8) -> QuizResult<PrefixLength> {
        if len > MAX_LENGTH {
            Err(QuizError::InvalidPrefixLength {
                prefix: len as u32,
                reason: format!("must be at most {MAX_LENGTH}"),
            })
        } else {
            Ok(PrefixLength(len))
        }
    }

    /// Validate a prefix for a subnetting exercise over a class whose
    /// default mask is `default_len`: strictly longer than the default and
    /// no longer than /30.
    pub fn for_subnetting(len: u8, default_len: PrefixLength) -> QuizResult<PrefixLength> {
        let prefix = PrefixLength::new(len)?;
        if prefix <= default_len || len > MAX_SUBNETTING_LENGTH {
            return Err(QuizError::InvalidPrefixLength {
                prefix: len as u32,
                reason: format!(
                    "subnetting a /{} network needs a prefix in /{}../{MAX_SUBNETTING_LENGTH}",
                    default_len.0,
                    default_len.0 + 1
                ),
            });
        }
        Ok(prefix)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Number of host bits left after the prefix.
    pub fn host_bits(self) -> u8 {
        MAX_LENGTH - self.0
    }
}

impl TryFrom<u8> for PrefixLength {
    type Error = QuizError;

    fn try_from(len: u8) -> Result<Self, Self::Error> {
        PrefixLength::new(len)
    }
}

impl From<PrefixLength> for u8 {
    fn from(prefix: PrefixLength) -> u8 {
        prefix.0
    }
}

impl FromStr for PrefixLength {
    type Err = QuizError;

    /// Accepts `"26"` or `"/26"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('/').unwrap_or(s);
        let len: u32 = digits
            .parse()
            .map_err(|_| QuizError::NotANumber(s.to_string()))?;
        let len = u8::try_from(len).map_err(|_| QuizError::InvalidPrefixLength {
            prefix: len,
            reason: format!("must be at most {MAX_LENGTH}"),
        })?;
        PrefixLength::new(len)
    }
}

impl std::fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// IPv4 address with a prefix length, written `a.b.c.d/p`.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash, PartialEq, PartialOrd)]
pub struct Cidr {
    /// The IPv4 address, not necessarily the network address.
    pub addr: Ipv4Addr,
    pub prefix: PrefixLength,
}

impl Cidr {
    /// Create a new [`Cidr`] from text such as `"211.17.48.246/26"`.
    pub fn new(addr_cidr: &str) -> QuizResult<Cidr> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(QuizError::MalformedAddress(addr_cidr.to_string()));
        }
        let addr = parse_address(parts[0])?;
        let prefix: PrefixLength = parts[1].parse()?;
        Ok(Cidr { addr, prefix })
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(
            parse_address("211.17.48.246").unwrap(),
            Ipv4Addr::new(211, 17, 48, 246)
        );
        assert_eq!(parse_address(" 0.0.0.0 ").unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(
            parse_address("255.255.255.255").unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
    }

    #[test]
    fn test_parse_address_leading_zeros() {
        let addr = parse_address("010.001.000.0255").unwrap();
        assert_eq!(addr, Ipv4Addr::new(10, 1, 0, 255));
        assert_eq!(format_address(addr), "10.1.0.255");
    }

    #[test]
    fn test_parse_address_rejects() {
        for bad in [
            "10.0.0",
            "10.0.0.1.5",
            "10.0.0.256",
            "10.0.-1.1",
            "10.0.x.1",
            "10..0.1",
            "",
            "10.0.0.+1",
            "10.0. 0.1",
            "10.0.0.99999999999",
        ] {
            assert_eq!(
                parse_address(bad),
                Err(QuizError::MalformedAddress(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_round_trip_text() {
        for text in ["1.2.3.4", "211.17.48.246", "0.0.0.0", "126.255.0.7"] {
            assert_eq!(format_address(parse_address(text).unwrap()), text);
        }
    }

    #[test]
    fn test_first_octet() {
        assert_eq!(first_octet(Ipv4Addr::new(192, 168, 1, 1)), 192);
        assert_eq!(first_octet(Ipv4Addr::new(0, 255, 255, 255)), 0);
    }

    #[test]
    fn test_prefix_length_bounds() {
        assert_eq!(PrefixLength::new(0).unwrap().bits(), 0);
        assert_eq!(PrefixLength::new(32).unwrap().host_bits(), 0);
        assert!(PrefixLength::new(33).is_err());
        assert_eq!("/26".parse::<PrefixLength>().unwrap().bits(), 26);
        assert_eq!(" 8 ".parse::<PrefixLength>().unwrap().bits(), 8);
        assert!("x".parse::<PrefixLength>().is_err());
        assert!("40".parse::<PrefixLength>().is_err());
    }

    #[test]
    fn test_prefix_for_subnetting() {
        let c = PrefixLength::new(24).unwrap();
        assert!(PrefixLength::for_subnetting(24, c).is_err());
        assert!(PrefixLength::for_subnetting(25, c).is_ok());
        assert!(PrefixLength::for_subnetting(30, c).is_ok());
        assert!(PrefixLength::for_subnetting(31, c).is_err());
        assert!(PrefixLength::for_subnetting(32, c).is_err());
        let a = PrefixLength::new(8).unwrap();
        assert!(PrefixLength::for_subnetting(9, a).is_ok());
        assert!(PrefixLength::for_subnetting(33, a).is_err());
    }

    #[test]
    fn test_cidr() {
        let cidr = Cidr::new("211.17.48.246/26").unwrap();
        assert_eq!(cidr.addr, Ipv4Addr::new(211, 17, 48, 246));
        assert_eq!(cidr.prefix.bits(), 26);
        assert_eq!(cidr.to_string(), "211.17.48.246/26");
        assert!(Cidr::new("211.17.48.246").is_err());
        assert!(Cidr::new("211.17.48.246/33").is_err());
    }

    #[test]
    fn test_cidr_serde() {
        let cidr = Cidr::new("10.1.2.3/20").unwrap();
        let json = serde_json::to_string(&cidr).unwrap();
        assert_eq!(json, "\"10.1.2.3/20\"");
        let back: Cidr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cidr);
        assert!(serde_json::from_str::<Cidr>("\"10.1.2.3/99\"").is_err());
        assert!(serde_json::from_str::<PrefixLength>("40").is_err());
    }
}
