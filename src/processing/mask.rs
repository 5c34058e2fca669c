//! Subnet and wildcard mask calculus.
//!
//! All functions are pure integer operations over a [`PrefixLength`]. The
//! wildcard mask is always derived as the bitwise complement of the subnet
//! mask, never by reformatting text.

use crate::error::{QuizError, QuizResult};
use crate::models::{PrefixLength, MAX_LENGTH};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Subnet mask as u32 for a prefix: top `len` bits set.
///
/// # Examples
/// ```
/// use subnet_quiz::models::PrefixLength;
/// use subnet_quiz::processing::mask_bits;
/// assert_eq!(mask_bits(PrefixLength::new(24).unwrap()), 0xFFFFFF00);
/// ```
pub fn mask_bits(prefix: PrefixLength) -> u32 {
    let right_len = MAX_LENGTH - prefix.bits();
    let all_bits = u32::MAX as u64;
    // shift in u64 so /0 does not overflow
    ((all_bits >> right_len) << right_len) as u32
}

/// Complementary subnet and wildcard masks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaskPair {
    subnet: u32,
    wildcard: u32,
}

impl MaskPair {
    pub fn from_prefix(prefix: PrefixLength) -> MaskPair {
        let subnet = mask_bits(prefix);
        MaskPair {
            subnet,
            wildcard: !subnet,
        }
    }

    pub fn subnet(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.subnet)
    }

    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.wildcard)
    }

    pub fn prefix(&self) -> PrefixLength {
        // leading_ones of a contiguous mask is at most 32
        PrefixLength::new(self.subnet.leading_ones() as u8).unwrap_or(PrefixLength::FULL)
    }
}

/// Subnet mask for a prefix length in dotted-decimal form via `Display`.
pub fn subnet_mask(prefix: PrefixLength) -> Ipv4Addr {
    MaskPair::from_prefix(prefix).subnet()
}

/// Wildcard mask: bitwise complement of [`subnet_mask`].
pub fn wildcard_mask(prefix: PrefixLength) -> Ipv4Addr {
    MaskPair::from_prefix(prefix).wildcard()
}

/// True when the bits are a run of 1s followed by a run of 0s.
pub fn is_contiguous_subnet(bits: u32) -> bool {
    bits.leading_ones() + bits.trailing_zeros() == MAX_LENGTH as u32
}

/// True when the bits are a run of 0s followed by a run of 1s.
pub fn is_contiguous_wildcard(bits: u32) -> bool {
    is_contiguous_subnet(!bits)
}

/// Inverse of [`subnet_mask`].
///
/// Fails with [`QuizError::InvalidMask`] when the mask is not a contiguous
/// run of 1s followed by 0s, e.g. `255.0.255.0`.
pub fn mask_to_prefix(mask: Ipv4Addr) -> QuizResult<PrefixLength> {
    let bits = u32::from(mask);
    if !is_contiguous_subnet(bits) {
        return Err(QuizError::InvalidMask(mask.to_string()));
    }
    PrefixLength::new(bits.leading_ones() as u8)
}

/// Inverse of [`wildcard_mask`].
pub fn wildcard_to_prefix(wildcard: Ipv4Addr) -> QuizResult<PrefixLength> {
    let bits = u32::from(wildcard);
    if !is_contiguous_wildcard(bits) {
        return Err(QuizError::InvalidMask(wildcard.to_string()));
    }
    PrefixLength::new(bits.leading_zeros() as u8)
}

pub fn network_bit_count(prefix: PrefixLength) -> u8 {
    prefix.bits()
}

pub fn host_bit_count(prefix: PrefixLength) -> u8 {
    prefix.host_bits()
}

/// Network address: the address with all host bits cleared.
pub fn network_address(addr: Ipv4Addr, prefix: PrefixLength) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & mask_bits(prefix))
}

/// Broadcast address: the address with all host bits set.
pub fn broadcast_address(addr: Ipv4Addr, prefix: PrefixLength) -> Ipv4Addr {
    let mask = MaskPair::from_prefix(prefix);
    Ipv4Addr::from((u32::from(addr) & mask.subnet) | mask.wildcard)
}

/// Usable hosts in a subnet (network and broadcast excluded). /31 and /32
/// have none.
pub fn usable_hosts(prefix: PrefixLength) -> u64 {
    match prefix.host_bits() {
        0 | 1 => 0,
        host_bits => (1u64 << host_bits) - 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(len: u8) -> PrefixLength {
        PrefixLength::new(len).unwrap()
    }

    #[test]
    fn test_mask_bits() {
        assert_eq!(mask_bits(p(0)), 0x00000000);
        assert_eq!(mask_bits(p(8)), 0xFF000000);
        assert_eq!(mask_bits(p(16)), 0xFFFF0000);
        assert_eq!(mask_bits(p(24)), 0xFFFFFF00);
        assert_eq!(mask_bits(p(26)), 0xFFFFFFC0);
        assert_eq!(mask_bits(p(32)), 0xFFFFFFFF);
    }

    #[test]
    fn test_subnet_and_wildcard_masks() {
        assert_eq!(subnet_mask(p(24)).to_string(), "255.255.255.0");
        assert_eq!(subnet_mask(p(16)).to_string(), "255.255.0.0");
        assert_eq!(subnet_mask(p(8)).to_string(), "255.0.0.0");
        assert_eq!(wildcard_mask(p(24)).to_string(), "0.0.0.255");
        assert_eq!(wildcard_mask(p(16)).to_string(), "0.0.255.255");
        assert_eq!(wildcard_mask(p(8)).to_string(), "0.255.255.255");
        assert_eq!(subnet_mask(p(26)).to_string(), "255.255.255.192");
        assert_eq!(wildcard_mask(p(26)).to_string(), "0.0.0.63");
    }

    #[test]
    fn test_mask_edges() {
        assert_eq!(subnet_mask(p(0)).to_string(), "0.0.0.0");
        assert_eq!(wildcard_mask(p(0)).to_string(), "255.255.255.255");
        assert_eq!(subnet_mask(p(32)).to_string(), "255.255.255.255");
        assert_eq!(wildcard_mask(p(32)).to_string(), "0.0.0.0");
    }

    #[test]
    fn test_masks_are_complementary_and_invertible() {
        for len in 0..=MAX_LENGTH {
            let prefix = p(len);
            let pair = MaskPair::from_prefix(prefix);
            assert_eq!(!u32::from(subnet_mask(prefix)), u32::from(wildcard_mask(prefix)));
            assert_eq!(mask_to_prefix(subnet_mask(prefix)).unwrap(), prefix);
            assert_eq!(wildcard_to_prefix(wildcard_mask(prefix)).unwrap(), prefix);
            assert_eq!(pair.prefix(), prefix);
        }
    }

    #[test]
    fn test_mask_to_prefix_rejects_non_contiguous() {
        for bad in [
            Ipv4Addr::new(255, 0, 255, 0),
            Ipv4Addr::new(0, 0, 0, 255),
            Ipv4Addr::new(255, 255, 255, 1),
            Ipv4Addr::new(128, 128, 0, 0),
        ] {
            assert_eq!(
                mask_to_prefix(bad),
                Err(QuizError::InvalidMask(bad.to_string()))
            );
        }
        assert!(wildcard_to_prefix(Ipv4Addr::new(255, 255, 255, 0)).is_err());
        assert!(wildcard_to_prefix(Ipv4Addr::new(0, 255, 0, 255)).is_err());
    }

    #[test]
    fn test_bit_counts() {
        assert_eq!(network_bit_count(p(24)), 24);
        assert_eq!(host_bit_count(p(24)), 8);
        assert_eq!(network_bit_count(p(8)), 8);
        assert_eq!(host_bit_count(p(8)), 24);
        assert_eq!(host_bit_count(p(0)), 32);
    }

    #[test]
    fn test_network_and_broadcast() {
        let ip = Ipv4Addr::new(211, 17, 48, 246);
        assert_eq!(network_address(ip, p(26)), Ipv4Addr::new(211, 17, 48, 192));
        assert_eq!(broadcast_address(ip, p(26)), Ipv4Addr::new(211, 17, 48, 255));
        assert_eq!(network_address(ip, p(0)), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(broadcast_address(ip, p(32)), ip);
        assert_eq!(
            broadcast_address(Ipv4Addr::new(10, 20, 30, 40), p(8)),
            Ipv4Addr::new(10, 255, 255, 255)
        );
    }

    #[test]
    fn test_usable_hosts() {
        assert_eq!(usable_hosts(p(24)), 254);
        assert_eq!(usable_hosts(p(26)), 62);
        assert_eq!(usable_hosts(p(30)), 2);
        assert_eq!(usable_hosts(p(31)), 0);
        assert_eq!(usable_hosts(p(32)), 0);
        assert_eq!(usable_hosts(p(0)), 4294967294);
    }
}
