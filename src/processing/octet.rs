//! Decimal/binary conversion drills over a single octet.

use crate::error::{QuizError, QuizResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Bit weights of an octet, most significant first.
pub const BIT_WEIGHTS: [u8; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// Eight-digit binary form of an octet.
pub fn to_binary(octet: u8) -> String {
    format!("{octet:08b}")
}

/// Read 1-8 binary digits; surrounding whitespace is ignored.
pub fn from_binary(text: &str) -> QuizResult<u8> {
    let digits = text.trim();
    if digits.is_empty() || digits.len() > 8 || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(QuizError::MalformedBinary(text.to_string()));
    }
    u8::from_str_radix(digits, 2).map_err(|_| QuizError::MalformedBinary(text.to_string()))
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrillDirection {
    /// Shown decimal, answer in binary.
    DecimalToBinary,
    /// Shown binary, answer in decimal.
    BinaryToDecimal,
}

/// One octet conversion question.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OctetDrill {
    pub value: u8,
    pub direction: DrillDirection,
}

impl OctetDrill {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, direction: DrillDirection) -> OctetDrill {
        OctetDrill {
            value: rng.gen(),
            direction,
        }
    }

    /// The value as shown to the user.
    pub fn shown(&self) -> String {
        match self.direction {
            DrillDirection::DecimalToBinary => self.value.to_string(),
            DrillDirection::BinaryToDecimal => to_binary(self.value),
        }
    }

    pub fn canonical(&self) -> String {
        match self.direction {
            DrillDirection::DecimalToBinary => to_binary(self.value),
            DrillDirection::BinaryToDecimal => self.value.to_string(),
        }
    }

    /// Grade an answer. Binary answers may drop leading zeros.
    pub fn grade(&self, candidate: &str) -> QuizResult<bool> {
        let answer = match self.direction {
            DrillDirection::DecimalToBinary => from_binary(candidate)?,
            DrillDirection::BinaryToDecimal => {
                let text = candidate.trim();
                let n: i64 = text
                    .parse()
                    .map_err(|_| QuizError::NotANumber(text.to_string()))?;
                match u8::try_from(n) {
                    Ok(n) => n,
                    Err(_) => return Ok(false),
                }
            }
        };
        Ok(answer == self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_to_binary() {
        assert_eq!(to_binary(0), "00000000");
        assert_eq!(to_binary(192), "11000000");
        assert_eq!(to_binary(255), "11111111");
        assert_eq!(to_binary(5), "00000101");
    }

    #[test]
    fn test_from_binary() {
        assert_eq!(from_binary("11000000"), Ok(192));
        assert_eq!(from_binary(" 101 "), Ok(5));
        for bad in ["", "2", "111111111", "10a", "1 0"] {
            assert!(from_binary(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_weights_sum_to_octet() {
        let value = 0b1010_0110u8;
        let sum: u32 = BIT_WEIGHTS
            .iter()
            .zip(to_binary(value).chars())
            .filter(|(_, bit)| *bit == '1')
            .map(|(w, _)| *w as u32)
            .sum();
        assert_eq!(sum, value as u32);
    }

    #[test]
    fn test_drill_grade() {
        let drill = OctetDrill {
            value: 200,
            direction: DrillDirection::DecimalToBinary,
        };
        assert_eq!(drill.shown(), "200");
        assert_eq!(drill.canonical(), "11001000");
        assert_eq!(drill.grade("11001000"), Ok(true));
        assert_eq!(drill.grade("11001001"), Ok(false));
        assert!(matches!(drill.grade("200"), Err(QuizError::MalformedBinary(_))));

        let drill = OctetDrill {
            value: 5,
            direction: DrillDirection::BinaryToDecimal,
        };
        assert_eq!(drill.shown(), "00000101");
        assert_eq!(drill.grade(" 5 "), Ok(true));
        assert_eq!(drill.grade("6"), Ok(false));
        assert_eq!(drill.grade("300"), Ok(false));
        assert!(matches!(drill.grade("five"), Err(QuizError::NotANumber(_))));
    }

    #[test]
    fn test_random_drill_is_replayable() {
        let a = OctetDrill::random(&mut StdRng::seed_from_u64(1), DrillDirection::BinaryToDecimal);
        let b = OctetDrill::random(&mut StdRng::seed_from_u64(1), DrillDirection::BinaryToDecimal);
        assert_eq!(a, b);
    }
}
