//! Fuzzy name matching
//!
//! Guesses are compared against the canonical name after trimming and
//! lowercasing, then accepted if they are within a small edit distance.

use crate::consts::MATCH_TOLERANCE;

/// Trim surrounding whitespace and lowercase
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Levenshtein distance (single-char insert / delete / substitute), per `char`
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // table[i][j] = distance between a[..i] and b[..j]
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j] // deletion
                    .min(table[i][j - 1]) // insertion
                    .min(table[i - 1][j - 1]) // substitution
            };
        }
    }

    table[a.len()][b.len()]
}

/// Check a guess against a target name using the default tolerance
pub fn is_match(guess: &str, target: &str) -> bool {
    is_match_within(guess, target, MATCH_TOLERANCE)
}

/// Check a guess against a target name, accepting up to `tolerance` edits
pub fn is_match_within(guess: &str, target: &str, tolerance: usize) -> bool {
    let guess = normalize(guess);
    let target = normalize(target);
    guess == target || edit_distance(&guess, &target) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Lady Gaga \t"), "lady gaga");
        assert_eq!(normalize("CHER"), "cher");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_edit_distance_known_values() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "cher"), 4);
        assert_eq!(edit_distance("cher", ""), 4);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("cheer", "cher"), 1);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_edit_distance_counts_chars_not_bytes() {
        // "é" is two bytes but one edit
        assert_eq!(edit_distance("beyonce", "beyoncé"), 1);
    }

    #[test]
    fn test_exact_match_ignores_case_and_whitespace() {
        assert!(is_match("cher", "Cher"));
        assert!(is_match("  NOEL GALLAGHER  ", "Noel Gallagher"));
    }

    #[test]
    fn test_close_misspellings_match() {
        assert!(is_match("cheer", "Cher"));
        assert!(is_match("lewis capaldy", "Lewis Capaldi"));
        assert!(is_match("lady gag", "Lady Gaga"));
        assert!(is_match("ldy gga", "Lady Gaga"));
    }

    #[test]
    fn test_distant_guesses_do_not_match() {
        assert!(!is_match("lady", "Lady Gaga"));
        assert!(!is_match("madonna", "Cher"));
        assert!(!is_match("noel", "Noel Gallagher"));
    }

    #[test]
    fn test_empty_guess_against_long_name() {
        assert!(!is_match("", "Lady Gaga"));
        assert!(!is_match("   ", "Cher"));
    }

    #[test]
    fn test_custom_tolerance() {
        assert!(!is_match_within("cheer", "Cher", 0));
        assert!(is_match_within("chr", "Cher", 1));
        assert!(is_match_within("lady", "Lady Gaga", 5));
    }

    fn name() -> impl Strategy<Value = String> {
        "[a-z]{5,12}( [a-z]{2,10})?"
    }

    proptest! {
        #[test]
        fn prop_distance_is_symmetric(a in "\\PC{0,16}", b in "\\PC{0,16}") {
            prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        }

        #[test]
        fn prop_distance_to_self_is_zero(a in "\\PC{0,24}") {
            prop_assert_eq!(edit_distance(&a, &a), 0);
        }

        #[test]
        fn prop_name_matches_itself(target in name()) {
            prop_assert!(is_match(&target, &target));
        }

        #[test]
        fn prop_two_substitutions_match(target in name(), i in 0usize..5, j in 0usize..5) {
            // Replace up to two letters with a digit, which never appears in names
            let mut chars: Vec<char> = target.chars().collect();
            chars[i] = '0';
            chars[j] = '1';
            let guess: String = chars.into_iter().collect();
            prop_assert!(edit_distance(&guess, &target) <= 2);
            prop_assert!(is_match(&guess, &target));
        }

        #[test]
        fn prop_three_substitutions_do_not_match(target in name()) {
            let mut chars: Vec<char> = target.chars().collect();
            chars[0] = '0';
            chars[2] = '1';
            chars[4] = '2';
            let guess: String = chars.into_iter().collect();
            prop_assert_eq!(edit_distance(&guess, &target), 3);
            prop_assert!(!is_match(&guess, &target));
        }
    }
}
