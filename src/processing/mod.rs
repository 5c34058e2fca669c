//! Addressing calculus.
//!
//! This module contains the logic behind every answer:
//! - [`mask`] - subnet/wildcard masks and bit counts
//! - [`address_map`] - native and per-bit address maps
//! - [`validate`] - normalizing and grading free-text answers
//! - [`generator`] - random problems from an injected rng
//! - [`octet`] - decimal/binary octet drills

mod address_map;
mod generator;
mod mask;
mod octet;
mod validate;

// Re-export public functions
pub use address_map::{
    format_map, native_map, subnet_map, AddressMap, MapBoundary, MapStyle, Symbol,
};
pub use generator::{generate_problem, random_classful_address, random_subnet_prefix};
pub use mask::{
    broadcast_address, host_bit_count, is_contiguous_subnet, is_contiguous_wildcard, mask_bits,
    mask_to_prefix, network_address, network_bit_count, subnet_mask, usable_hosts,
    wildcard_mask, wildcard_to_prefix, MaskPair,
};
pub use octet::{from_binary, to_binary, DrillDirection, OctetDrill, BIT_WEIGHTS};
pub use validate::{grade_answer, normalize, validate, QUIZZED_BIT_PATTERNS};
