//! Levenshtein edit distance.
//!
//! Counts single-character insertions, deletions and substitutions over
//! Unicode scalar values. The result is always exact: there is no length
//! cap or early exit, since the lockout decision depends on the true value.

/// Minimum number of single-character edits turning `a` into `b`.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance_chars(&a, &b)
}

/// [`edit_distance`] over pre-split character slices.
#[must_use]
pub fn edit_distance_chars(a: &[char], b: &[char]) -> usize {
    // Keep the shorter sequence on the row axis.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_is_zero() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("racecar", "racecar"), 0);
    }

    #[test]
    fn empty_side_is_length_of_other() {
        assert_eq!(edit_distance("", " "), 1);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "héllo"), 5);
    }

    #[test]
    fn classic_pairs() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("racecar", "racecat"), 1);
        assert_eq!(edit_distance("racecar", "tacocat"), 3);
    }

    #[test]
    fn case_is_a_substitution() {
        assert_eq!(edit_distance("secret", "SECRET"), 6);
        assert_eq!(edit_distance("a", "A"), 1);
    }

    #[test]
    fn unicode_counts_scalars_not_bytes() {
        assert_eq!(edit_distance("didn’t", "didn't"), 1);
        assert_eq!(edit_distance("hello world", "hello 🤓"), 5);
        assert_eq!(edit_distance("🤓", "😎"), 1);
    }

    #[test]
    fn shifted_sequence_is_two_edits() {
        // Drop the leading char, append one at the end.
        assert_eq!(edit_distance("101010", "010101"), 2);
    }

    #[test]
    fn symmetric() {
        assert_eq!(
            edit_distance("cababccba", "abcabcabc"),
            edit_distance("abcabcabc", "cababccba"),
        );
        assert_eq!(
            edit_distance("short", "a much longer string"),
            edit_distance("a much longer string", "short"),
        );
    }

    #[test]
    fn uncapped_for_large_inputs() {
        let a = "a".repeat(500);
        let b = "b".repeat(700);
        assert_eq!(edit_distance(&a, &b), 700);
    }
}
