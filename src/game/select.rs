//! Puzzle target selection

use rand::Rng;

/// Pick a catalog index uniformly at random, avoiding `exclude` when possible.
///
/// With a single entry the exclusion is ignored. An out-of-range `exclude`
/// is treated as absent. `len` must be non-zero.
pub fn select_target<R: Rng>(rng: &mut R, len: usize, exclude: Option<usize>) -> usize {
    debug_assert!(len > 0, "cannot select from an empty catalog");
    match exclude {
        Some(skip) if len > 1 && skip < len => {
            // Draw from the remaining len - 1 slots and step over the excluded one
            let idx = rng.random_range(0..len - 1);
            if idx >= skip { idx + 1 } else { idx }
        }
        _ => rng.random_range(0..len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_select_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            assert!(select_target(&mut rng, 4, None) < 4);
        }
    }

    #[test]
    fn test_select_never_returns_excluded() {
        let mut rng = Pcg32::seed_from_u64(12345);
        for skip in 0..4 {
            for _ in 0..200 {
                let idx = select_target(&mut rng, 4, Some(skip));
                assert_ne!(idx, skip);
                assert!(idx < 4);
            }
        }
    }

    #[test]
    fn test_select_single_entry_ignores_exclude() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(select_target(&mut rng, 1, Some(0)), 0);
        assert_eq!(select_target(&mut rng, 1, None), 0);
    }

    #[test]
    fn test_select_covers_all_other_entries() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut seen = [false; 4];
        for _ in 0..500 {
            seen[select_target(&mut rng, 4, Some(2))] = true;
        }
        assert_eq!(seen, [true, true, false, true]);
    }

    #[test]
    fn test_select_out_of_range_exclude_is_ignored() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            assert!(select_target(&mut rng, 3, Some(10)) < 3);
        }
    }

    #[test]
    fn test_select_is_deterministic_for_seed() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                select_target(&mut a, 10, Some(3)),
                select_target(&mut b, 10, Some(3))
            );
        }
    }
}
