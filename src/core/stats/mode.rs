//! Frequency helpers shared by the statistics queries.

use std::collections::BTreeMap;

fn counts<T: Ord, I: IntoIterator<Item = T>>(values: I) -> BTreeMap<T, usize> {
    let mut map = BTreeMap::new();
    for v in values {
        *map.entry(v).or_insert(0) += 1;
    }
    map
}

/// Most frequent value. On a tie the smallest value wins, so the result
/// does not depend on row order.
pub fn mode<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    // BTreeMap iterates ascending; only a strictly higher count replaces
    for (value, n) in counts(values) {
        if best.as_ref().is_none_or(|(_, best_n)| n > *best_n) {
            best = Some((value, n));
        }
    }
    best.map(|(v, _)| v)
}

/// Occurrences per value, highest count first, ties by ascending value.
pub fn value_counts<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Vec<(T, usize)> {
    let mut out: Vec<(T, usize)> = counts(values).into_iter().collect();
    // stable sort keeps the ascending key order among equal counts
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_picks_highest_count() {
        assert_eq!(mode([3, 1, 3, 2]), Some(3));
        assert_eq!(mode(["b", "a", "b"]), Some("b"));
    }

    #[test]
    fn mode_ties_go_to_smallest_value() {
        assert_eq!(mode([9, 4, 9, 4, 7]), Some(4));
        assert_eq!(mode(["Sunday", "Monday", "Sunday", "Monday"]), Some("Monday"));
        // order of appearance does not matter
        assert_eq!(mode([4, 9, 4, 9]), mode([9, 4, 9, 4]));
    }

    #[test]
    fn mode_of_nothing_is_none() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn value_counts_order() {
        let vc = value_counts(["Customer", "Subscriber", "Subscriber", "Dependent", "Customer"]);
        assert_eq!(
            vc,
            vec![("Customer", 2), ("Subscriber", 2), ("Dependent", 1)]
        );
    }
}
