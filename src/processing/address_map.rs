//! Address map notation.
//!
//! Two renderings exist:
//! - the native (classful) map, one symbol per octet: `N.N.N.H`, or with the
//!   network octets resolved to their values: `211.17.48.H`;
//! - the subnet map, one symbol per bit in four groups of eight, where `S`
//!   marks network bits borrowed from the classful host part:
//!   `NNNNNNNN.NNNNNNNN.NNNNNNNN.SSHHHHHH`.

use crate::error::{QuizError, QuizResult};
use crate::models::{classify, classify_classful, AddressClass, PrefixLength, MAX_LENGTH};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Network,
    Subnet,
    Host,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::Network => 'N',
            Symbol::Subnet => 'S',
            Symbol::Host => 'H',
        }
    }

    /// Uppercase only.
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            'N' => Some(Symbol::Network),
            'S' => Some(Symbol::Subnet),
            'H' => Some(Symbol::Host),
            _ => None,
        }
    }
}

/// Per-bit map of a 32-bit address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressMap {
    symbols: [Symbol; MAX_LENGTH as usize],
}

impl AddressMap {
    /// Map for `prefix` over an address of `class`. Bits up to the class
    /// default are `N`, bits from there up to the prefix are `S`, the rest
    /// `H`. Classes without a default mask have no subnet bits.
    pub fn new(class: AddressClass, prefix: PrefixLength) -> AddressMap {
        let prefix = prefix.bits() as usize;
        let network = class
            .default_prefix()
            .map_or(prefix, |d| prefix.min(d.bits() as usize));

        let mut symbols = [Symbol::Host; MAX_LENGTH as usize];
        for (i, symbol) in symbols.iter_mut().enumerate().take(prefix) {
            *symbol = if i < network {
                Symbol::Network
            } else {
                Symbol::Subnet
            };
        }
        AddressMap { symbols }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// `N` and `S` bits together; equals the prefix length.
    pub fn network_count(&self) -> usize {
        self.symbols.iter().filter(|s| **s != Symbol::Host).count()
    }

    pub fn subnet_count(&self) -> usize {
        self.symbols.iter().filter(|s| **s == Symbol::Subnet).count()
    }

    pub fn host_count(&self) -> usize {
        self.symbols.iter().filter(|s| **s == Symbol::Host).count()
    }
}

impl std::fmt::Display for AddressMap {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let text = self
            .symbols
            .chunks(8)
            .map(|octet| octet.iter().map(|s| s.as_char()).collect::<String>())
            .join(".");
        f.write_str(&text)
    }
}

impl FromStr for AddressMap {
    type Err = QuizError;

    /// Four dot-separated groups of eight uppercase `N`/`S`/`H`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || QuizError::MalformedAddressMap(s.to_string());
        let groups: Vec<&str> = s.split('.').collect();
        if groups.len() != 4 || groups.iter().any(|g| g.chars().count() != 8) {
            return Err(malformed());
        }

        let mut symbols = [Symbol::Host; MAX_LENGTH as usize];
        for (symbol, c) in symbols.iter_mut().zip(groups.concat().chars()) {
            *symbol = Symbol::from_char(c).ok_or_else(malformed)?;
        }
        Ok(AddressMap { symbols })
    }
}

/// How a native map shows its network octets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MapStyle {
    /// `N.N.N.H`, the canonical answer form.
    #[default]
    Abstract,
    /// `211.17.48.H`
    Resolved,
}

/// Where the network/host split of a rendered map falls.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MapBoundary {
    /// At the class default mask.
    Classful,
    Prefix(PrefixLength),
}

/// Native address map of an A/B/C address, one symbol per octet.
pub fn native_map(addr: Ipv4Addr, style: MapStyle) -> QuizResult<String> {
    let class = classify_classful(addr)?;
    let network_octets = class.network_octets().unwrap_or(0);
    let map = addr
        .octets()
        .iter()
        .enumerate()
        .map(|(i, octet)| match (i < network_octets, style) {
            (true, MapStyle::Abstract) => "N".to_string(),
            (true, MapStyle::Resolved) => octet.to_string(),
            (false, _) => "H".to_string(),
        })
        .join(".");
    Ok(map)
}

/// Per-bit subnet map of an address at an arbitrary prefix.
pub fn subnet_map(addr: Ipv4Addr, prefix: PrefixLength) -> AddressMap {
    AddressMap::new(classify(addr), prefix)
}

/// Render the map for an address. A prefix equal to the class default is
/// rendered as the native map; any other prefix as the per-bit subnet map.
pub fn format_map(addr: Ipv4Addr, boundary: MapBoundary, style: MapStyle) -> QuizResult<String> {
    match boundary {
        MapBoundary::Classful => native_map(addr, style),
        MapBoundary::Prefix(prefix) => {
            if classify(addr).default_prefix() == Some(prefix) {
                native_map(addr, style)
            } else {
                Ok(subnet_map(addr, prefix).to_string())
            }
        }
    }
}
