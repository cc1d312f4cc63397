//! Catch odds
//!
//! Harder pokemon (higher base experience) are less likely to be caught.

use rand::Rng;

/// Probability of catching a pokemon with the given base experience.
///
/// | base experience | chance |
/// |-----------------|--------|
/// | > 600           | 5%     |
/// | > 500           | 7.5%   |
/// | > 400           | 10%    |
/// | > 200           | 15%    |
/// | > 100           | 20%    |
/// | otherwise       | 25%    |
pub fn catch_chance(base_experience: u32) -> f64 {
    match base_experience {
        exp if exp > 600 => 0.05,
        exp if exp > 500 => 0.075,
        exp if exp > 400 => 0.10,
        exp if exp > 200 => 0.15,
        exp if exp > 100 => 0.20,
        _ => 0.25,
    }
}

/// Rolls a uniform value in `[0, 1)` and reports whether it falls under the
/// catch chance for `base_experience`.
pub fn attempt_catch<R: Rng + ?Sized>(rng: &mut R, base_experience: u32) -> bool {
    rng.gen::<f64>() < catch_chance(base_experience)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catch_chance_tiers() {
        assert_eq!(catch_chance(0), 0.25);
        assert_eq!(catch_chance(100), 0.25);
        assert_eq!(catch_chance(101), 0.20);
        assert_eq!(catch_chance(200), 0.20);
        assert_eq!(catch_chance(201), 0.15);
        assert_eq!(catch_chance(401), 0.10);
        assert_eq!(catch_chance(501), 0.075);
        assert_eq!(catch_chance(600), 0.075);
        assert_eq!(catch_chance(601), 0.05);
    }

    #[test]
    fn test_attempt_catch_low_roll_succeeds() {
        let mut rng = StepRng::new(0, 0);
        assert!(attempt_catch(&mut rng, 608));
    }

    #[test]
    fn test_attempt_catch_high_roll_fails() {
        let mut rng = StepRng::new(u64::MAX, 0);
        assert!(!attempt_catch(&mut rng, 36));
    }

    #[test]
    fn test_attempt_catch_rate_tracks_chance() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 20_000;
        let caught = (0..trials).filter(|_| attempt_catch(&mut rng, 50)).count();
        let rate = caught as f64 / trials as f64;

        assert!((rate - 0.25).abs() < 0.02, "rate was {}", rate);
    }
}
