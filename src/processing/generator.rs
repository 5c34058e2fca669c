//! Random problem generation.
//!
//! The only place randomness enters. The random source is always passed in,
//! so a seeded rng replays the same problems.

use crate::error::QuizResult;
use crate::models::{AddressClass, ProblemInstance, QuizMode, MAX_SUBNETTING_LENGTH};
use rand::Rng;
use std::net::Ipv4Addr;

/// Pick class A, B or C uniformly, then an address inside that class.
pub fn random_classful_address<R: Rng + ?Sized>(rng: &mut R) -> (Ipv4Addr, AddressClass) {
    let (class, first) = match rng.gen_range(0..3) {
        0 => (AddressClass::A, rng.gen_range(1..=126)),
        1 => (AddressClass::B, rng.gen_range(128..=191)),
        _ => (AddressClass::C, rng.gen_range(192..=223)),
    };
    let addr = Ipv4Addr::new(first, rng.gen(), rng.gen(), rng.gen());
    (addr, class)
}

/// Pick a prefix strictly longer than the class default and at most /30.
pub fn random_subnet_prefix<R: Rng + ?Sized>(rng: &mut R, class: AddressClass) -> u8 {
    let default_len = class.default_prefix().map_or(0, |p| p.bits());
    rng.gen_range(default_len + 1..=MAX_SUBNETTING_LENGTH)
}

/// Generate a complete problem for `mode`.
pub fn generate_problem<R: Rng + ?Sized>(mode: QuizMode, rng: &mut R) -> QuizResult<ProblemInstance> {
    let (addr, class) = random_classful_address(rng);
    let prefix = random_subnet_prefix(rng, class);
    log::debug!("generated {addr}/{prefix} (class {class}) for {mode:?}");
    ProblemInstance::new(mode, addr, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classify;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_classful_address_is_eligible() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let (addr, class) = random_classful_address(&mut rng);
            assert_eq!(classify(addr), class);
            assert!(class.is_quiz_eligible());
            let first = addr.octets()[0];
            assert!((1..=223).contains(&first) && first != 127, "{addr}");
        }
    }

    #[test]
    fn test_random_subnet_prefix_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for class in [AddressClass::A, AddressClass::B, AddressClass::C] {
            let default_len = class.default_prefix().unwrap().bits();
            for _ in 0..200 {
                let prefix = random_subnet_prefix(&mut rng, class);
                assert!(prefix > default_len && prefix <= 30, "{class} /{prefix}");
            }
        }
    }

    #[test]
    fn test_generate_problem_is_replayable() {
        let a = generate_problem(QuizMode::Subnetting, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_problem(QuizMode::Subnetting, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_problem_many() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let problem = generate_problem(QuizMode::Classful, &mut rng).unwrap();
            assert_eq!(problem.mode, QuizMode::Classful);
            assert!(problem.prefix().bits() <= 30);
        }
    }
}
