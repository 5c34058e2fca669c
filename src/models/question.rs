//! Question kinds and answers.

use serde::{Deserialize, Serialize};

/// What a single quiz question asks for. Each kind has its own answer
/// grammar, see [`crate::processing::validate`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    AddressClass,
    LeadingBitPattern,
    NativeAddressMap,
    SubnetAddressMap,
    SubnetMask,
    WildcardMask,
    NetworkBitCount,
    HostBitCount,
    PrefixLength,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 9] = [
        QuestionKind::AddressClass,
        QuestionKind::LeadingBitPattern,
        QuestionKind::NativeAddressMap,
        QuestionKind::SubnetAddressMap,
        QuestionKind::SubnetMask,
        QuestionKind::WildcardMask,
        QuestionKind::NetworkBitCount,
        QuestionKind::HostBitCount,
        QuestionKind::PrefixLength,
    ];

    /// Strict kinds are compared case-sensitively; the others are uppercased
    /// before comparison.
    pub fn is_strict(self) -> bool {
        matches!(
            self,
            QuestionKind::AddressClass
                | QuestionKind::LeadingBitPattern
                | QuestionKind::NativeAddressMap
                | QuestionKind::SubnetAddressMap
        )
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            QuestionKind::NetworkBitCount | QuestionKind::HostBitCount | QuestionKind::PrefixLength
        )
    }

    /// Label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::AddressClass => "Native Address Class",
            QuestionKind::LeadingBitPattern => "Leading Bit Pattern",
            QuestionKind::NativeAddressMap => "Native Address Map",
            QuestionKind::SubnetAddressMap => "Subnet Address Map",
            QuestionKind::SubnetMask => "Subnet Mask (SNM)",
            QuestionKind::WildcardMask => "Wildcard Mask (WCM)",
            QuestionKind::NetworkBitCount => "Network Bits",
            QuestionKind::HostBitCount => "Host Bits",
            QuestionKind::PrefixLength => "Prefix Length",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical answer text, plus any alternative spellings that also count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Shown to the user when they get it wrong.
    pub canonical: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Answer {
    pub fn new(canonical: impl Into<String>) -> Answer {
        Answer {
            canonical: canonical.into(),
            aliases: vec![],
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Answer {
        self.aliases.push(alias.into());
        self
    }

    /// Canonical text first, then aliases.
    pub fn accepted(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

impl From<&str> for Answer {
    fn from(canonical: &str) -> Answer {
        Answer::new(canonical)
    }
}

/// Outcome of grading one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub kind: QuestionKind,
    pub correct: bool,
    /// Candidate after the kind's normalization.
    pub normalized_candidate: String,
    pub canonical: String,
}
