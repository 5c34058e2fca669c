//! A single quiz round: an address, a prefix and every canonical answer.

use super::class::{classify_classful, AddressClass};
use super::ipv4::{Cidr, PrefixLength};
use super::question::{Answer, QuestionKind};
use crate::error::{QuizError, QuizResult};
use crate::processing::{
    host_bit_count, native_map, network_bit_count, subnet_map, MapStyle, MaskPair,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Which quiz a problem belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuizMode {
    /// Class, leading bits, native map and masks.
    #[default]
    Classful,
    /// Per-bit map, masks and bit counts.
    Subnetting,
}

impl QuizMode {
    /// Questions asked in this mode, in presentation order.
    pub fn questions(self) -> &'static [QuestionKind] {
        match self {
            QuizMode::Classful => &[
                QuestionKind::AddressClass,
                QuestionKind::LeadingBitPattern,
                QuestionKind::NativeAddressMap,
                QuestionKind::SubnetMask,
                QuestionKind::WildcardMask,
            ],
            QuizMode::Subnetting => &[
                QuestionKind::SubnetAddressMap,
                QuestionKind::SubnetMask,
                QuestionKind::WildcardMask,
                QuestionKind::NetworkBitCount,
                QuestionKind::HostBitCount,
                QuestionKind::PrefixLength,
            ],
        }
    }
}

impl FromStr for QuizMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classful" => Ok(QuizMode::Classful),
            "subnetting" | "subnet" => Ok(QuizMode::Subnetting),
            other => Err(format!("unknown quiz mode {other:?}")),
        }
    }
}

/// Fully specified problem. Read-only once built; the caller keeps it
/// between generating and grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemInstance {
    pub mode: QuizMode,
    pub cidr: Cidr,
    pub class: AddressClass,
    pub canonical_answers: BTreeMap<QuestionKind, Answer>,
}

impl ProblemInstance {
    /// Build a problem for an A/B/C address and a subnetting prefix in
    /// `(class default, 30]`.
    pub fn new(mode: QuizMode, addr: Ipv4Addr, prefix: u8) -> QuizResult<ProblemInstance> {
        let class = classify_classful(addr)?;
        let default_prefix = class
            .default_prefix()
            .ok_or_else(|| QuizError::UnsupportedClass {
                address: addr.to_string(),
                class,
            })?;
        let prefix = PrefixLength::for_subnetting(prefix, default_prefix)?;

        let canonical_answers = canonical_answers(addr, class, prefix)?;
        log::debug!("new {mode:?} problem {addr}/{prefix} class {class}");
        Ok(ProblemInstance {
            mode,
            cidr: Cidr { addr, prefix },
            class,
            canonical_answers,
        })
    }

    pub fn address(&self) -> Ipv4Addr {
        self.cidr.addr
    }

    pub fn prefix(&self) -> PrefixLength {
        self.cidr.prefix
    }

    pub fn questions(&self) -> &'static [QuestionKind] {
        self.mode.questions()
    }

    pub fn answer(&self, kind: QuestionKind) -> QuizResult<&Answer> {
        self.canonical_answers
            .get(&kind)
            .ok_or(QuizError::MissingAnswer(kind))
    }

    /// Question line shown to the user.
    pub fn prompt(&self) -> String {
        format!("Given the IP address {}, answer the following:", self.cidr)
    }
}

fn canonical_answers(
    addr: Ipv4Addr,
    class: AddressClass,
    prefix: PrefixLength,
) -> QuizResult<BTreeMap<QuestionKind, Answer>> {
    let masks = MaskPair::from_prefix(prefix);
    let leading_bits = class.leading_bits().unwrap_or_default();
    let native = Answer::new(native_map(addr, MapStyle::Abstract)?)
        .with_alias(native_map(addr, MapStyle::Resolved)?);

    Ok(BTreeMap::from([
        (QuestionKind::AddressClass, Answer::new(class.to_string())),
        (QuestionKind::LeadingBitPattern, Answer::new(leading_bits)),
        (QuestionKind::NativeAddressMap, native),
        (
            QuestionKind::SubnetAddressMap,
            Answer::new(subnet_map(addr, prefix).to_string()),
        ),
        (QuestionKind::SubnetMask, Answer::new(masks.subnet().to_string())),
        (QuestionKind::WildcardMask, Answer::new(masks.wildcard().to_string())),
        (
            QuestionKind::NetworkBitCount,
            Answer::new(network_bit_count(prefix).to_string()),
        ),
        (
            QuestionKind::HostBitCount,
            Answer::new(host_bit_count(prefix).to_string()),
        ),
        (QuestionKind::PrefixLength, Answer::new(prefix.to_string())),
    ]))
}
