//! Levenshtein distance calculation.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings: the minimum
/// number of single-character insertions, deletions, or substitutions
/// required to change one into the other.
///
/// Uses the classic dynamic program, kept to two rows; the result is
/// identical to the full-table version.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (len_a, len_b) = (a_chars.len(), b_chars.len());

    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    let mut prev_row: Vec<usize> = (0..=len_b).collect();
    let mut curr_row = vec![0; len_b + 1];

    for i in 1..=len_a {
        curr_row[0] = i;
        for j in 1..=len_b {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len_b]
}

/// Calculate the Levenshtein distance with a maximum threshold.
///
/// Returns `None` as soon as the distance is known to exceed `max`, which
/// makes filtering large candidate sets much cheaper than computing the
/// exact distance every time.
pub fn distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (len_a, len_b) = (a_chars.len(), b_chars.len());

    // The distance is at least the length difference.
    if len_a.abs_diff(len_b) > max {
        return None;
    }
    if len_a == 0 {
        return (len_b <= max).then_some(len_b);
    }
    if len_b == 0 {
        return (len_a <= max).then_some(len_a);
    }

    let mut prev_row: Vec<usize> = (0..=len_b).collect();
    let mut curr_row = vec![0; len_b + 1];

    for i in 1..=len_a {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len_b {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr_row[j] = min(
                min(prev_row[j] + 1, curr_row[j - 1] + 1),
                prev_row[j - 1] + cost,
            );
            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Every remaining cell can only grow from here.
        if min_in_row > max {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let result = prev_row[len_b];
    (result <= max).then_some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "a"), 1);
        assert_eq!(distance("a", ""), 1);
        assert_eq!(distance("a", "a"), 0);
        assert_eq!(distance("ab", "ac"), 1);
        assert_eq!(distance("abc", "def"), 3);
        assert_eq!(distance("kitten", "sitting"), 3);
        // A plain transposition costs 2 (no transposition edit).
        assert_eq!(distance("search", "serach"), 2);
    }

    #[test]
    fn test_single_edit_pairs() {
        // "dg" -> "dog" is a single insertion.
        assert_eq!(distance("dg", "dog"), 1);
        // "catt" -> "cat" is a single deletion.
        assert_eq!(distance("catt", "cat"), 1);
    }

    #[test]
    fn test_distance_handles_multibyte_chars() {
        assert_eq!(distance("žlutý", "zlutý"), 1);
        assert_eq!(distance("kůň", "kun"), 2);
    }

    #[test]
    fn test_identity() {
        for word in ["", "a", "kočka", "přeřeknutí"] {
            assert_eq!(distance(word, word), 0);
        }
    }

    #[test]
    fn test_symmetry() {
        let samples = ["", "a", "ab", "cat", "kočka", "catt"];
        for a in samples {
            for b in samples {
                assert_eq!(distance(a, b), distance(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let samples = ["", "a", "ab", "cat", "dog", "catt", "kočka"];
        for a in samples {
            for b in samples {
                for c in samples {
                    assert!(
                        distance(a, c) <= distance(a, b) + distance(b, c),
                        "triangle violated for {a}, {b}, {c}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_distance_within() {
        assert_eq!(distance_within("kitten", "sitting", 3), Some(3));
        assert_eq!(distance_within("kitten", "sitting", 2), None);
        assert_eq!(distance_within("search", "search", 0), Some(0));
        assert_eq!(distance_within("a", "abc", 1), None);
        assert_eq!(distance_within("a", "ab", 1), Some(1));
        assert_eq!(distance_within("", "ab", 2), Some(2));
        assert_eq!(distance_within("ab", "", 1), None);
    }

    #[test]
    fn test_distance_within_agrees_with_distance() {
        let samples = ["", "a", "ab", "cat", "dog", "catt", "dg", "kočka"];
        for a in samples {
            for b in samples {
                let exact = distance(a, b);
                for max in 0..5 {
                    let bounded = distance_within(a, b, max);
                    if exact <= max {
                        assert_eq!(bounded, Some(exact), "{a} vs {b} within {max}");
                    } else {
                        assert_eq!(bounded, None, "{a} vs {b} within {max}");
                    }
                }
            }
        }
    }
}
