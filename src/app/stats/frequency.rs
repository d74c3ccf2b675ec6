//! Insertion-ordered frequency counting
//!
//! The mode rule used by every statistic pass: count occurrences in row
//! order, then take the first value reaching the maximum count. Backing the
//! counts with an [`IndexMap`] makes the first-seen tie-break explicit instead
//! of relying on any container's incidental iteration order.

use std::hash::Hash;

use indexmap::IndexMap;

/// Count occurrences, preserving first-seen key order
pub fn counts<K, I>(values: I) -> IndexMap<K, u64>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut counts = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value, ties broken by first occurrence in input order
///
/// Returns `None` for an empty input.
pub fn mode<K, I>(values: I) -> Option<K>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut best: Option<(K, u64)> = None;
    for (value, count) in counts(values) {
        // Strictly greater keeps the earliest value on ties
        if best.as_ref().map_or(true, |(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_preserve_first_seen_order() {
        let counted = counts(["b", "a", "b", "c", "a", "b"]);
        let keys: Vec<&str> = counted.keys().copied().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(counted["b"], 3);
        assert_eq!(counted["a"], 2);
        assert_eq!(counted["c"], 1);
    }

    #[test]
    fn test_mode_simple() {
        assert_eq!(mode(["x", "y", "y", "z"]), Some("y"));
    }

    #[test]
    fn test_mode_tie_break_is_first_in_row_order() {
        // Two values with equal frequency: the one appearing first wins
        assert_eq!(mode(["late", "early", "early", "late"]), Some("late"));
        assert_eq!(mode(["early", "late", "late", "early"]), Some("early"));
    }

    #[test]
    fn test_mode_of_empty_input() {
        assert_eq!(mode(Vec::<&str>::new()), None);
    }
}
