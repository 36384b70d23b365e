//! Ordered key multiset: duplicate-preserving sorted key storage.

use crate::types::IndexKey;

/// Index keys held in ascending order, with multiplicity.
///
/// Every occurrence of a key is stored; a fan-out row contributes one
/// slot per generated key. Insertion and removal locate positions by
/// binary search, and range extraction returns the contiguous in-range
/// slice, so a range query costs O(log n + k).
///
/// Range bounds are both inclusive, and cover every occurrence of a
/// bound key.
#[derive(Debug, Clone, Default)]
pub struct OrderedKeys {
    entries: Vec<IndexKey>,
}

impl OrderedKeys {
    /// Creates an empty multiset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of key occurrences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all key occurrences in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[IndexKey] {
        &self.entries
    }

    /// Inserts one occurrence of a key, preserving sort order.
    pub fn insert(&mut self, key: IndexKey) {
        let position = self.entries.partition_point(|entry| *entry <= key);
        self.entries.insert(position, key);
    }

    /// Removes exactly one occurrence of a key by value.
    ///
    /// Returns false if the key is not present.
    pub fn remove(&mut self, key: &IndexKey) -> bool {
        let position = self.entries.partition_point(|entry| entry < key);
        if self.entries.get(position) == Some(key) {
            self.entries.remove(position);
            true
        } else {
            false
        }
    }

    /// Returns all occurrences with `lower <= key <= upper`, in order.
    #[must_use]
    pub fn range(&self, lower: &IndexKey, upper: &IndexKey) -> &[IndexKey] {
        let start = self.entries.partition_point(|entry| entry < lower);
        let end = self.entries.partition_point(|entry| entry <= upper);
        &self.entries[start..end.max(start)]
    }

    /// Like [`range`](Self::range), with `offset`/`limit` applied to
    /// the in-range occurrence slice.
    #[must_use]
    pub fn range_paged(
        &self,
        lower: &IndexKey,
        upper: &IndexKey,
        offset: usize,
        limit: usize,
    ) -> &[IndexKey] {
        let in_range = self.range(lower, upper);
        let start = offset.min(in_range.len());
        let end = start.saturating_add(limit).min(in_range.len());
        &in_range[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[&str]) -> Vec<IndexKey> {
        raw.iter().map(|s| IndexKey::from(*s)).collect()
    }

    #[test]
    fn insert_keeps_ascending_order() {
        let mut ordered = OrderedKeys::new();
        for key in ["Tolkien", "Milne", "Verne", "Milne"] {
            ordered.insert(IndexKey::from(key));
        }
        assert_eq!(
            ordered.as_slice(),
            keys(&["Milne", "Milne", "Tolkien", "Verne"])
        );
    }

    #[test]
    fn remove_takes_exactly_one_occurrence() {
        let mut ordered = OrderedKeys::new();
        ordered.insert(IndexKey::from(5.0));
        ordered.insert(IndexKey::from(5.0));
        ordered.insert(IndexKey::from(1.0));

        assert!(ordered.remove(&IndexKey::from(5.0)));
        assert_eq!(ordered.as_slice(), &[IndexKey::from(1.0), IndexKey::from(5.0)]);
        assert!(!ordered.remove(&IndexKey::from(9.0)));
    }

    #[test]
    fn range_is_inclusive_at_both_bounds() {
        let mut ordered = OrderedKeys::new();
        for n in [1.0, 1.0, 3.0, 5.0, 9.0] {
            ordered.insert(IndexKey::from(n));
        }

        let hits = ordered.range(&IndexKey::from(1.0), &IndexKey::from(5.0));
        assert_eq!(hits.len(), 4); // 1, 1, 3, 5

        // a bound equal to a stored key covers all its occurrences
        let ties = ordered.range(&IndexKey::from(1.0), &IndexKey::from(1.0));
        assert_eq!(ties.len(), 2);
    }

    #[test]
    fn range_excludes_values_just_outside_the_bounds() {
        let mut ordered = OrderedKeys::new();
        for n in [10.0, 20.0, 30.0] {
            ordered.insert(IndexKey::from(n));
        }

        let hits = ordered.range(&IndexKey::from(10.5), &IndexKey::from(29.5));
        assert_eq!(hits, &[IndexKey::from(20.0)]);

        let empty = ordered.range(&IndexKey::from(21.0), &IndexKey::from(29.0));
        assert!(empty.is_empty());
    }

    #[test]
    fn range_on_empty_multiset_is_empty() {
        let ordered = OrderedKeys::new();
        assert!(ordered
            .range(&IndexKey::from("a"), &IndexKey::from("z"))
            .is_empty());
    }

    #[test]
    fn pagination_slices_the_in_range_occurrences() {
        let mut ordered = OrderedKeys::new();
        for n in [1.0, 2.0, 3.0, 4.0, 5.0] {
            ordered.insert(IndexKey::from(n));
        }

        let page = ordered.range_paged(&IndexKey::from(1.0), &IndexKey::from(5.0), 1, 2);
        assert_eq!(page, &[IndexKey::from(2.0), IndexKey::from(3.0)]);

        let past_end =
            ordered.range_paged(&IndexKey::from(1.0), &IndexKey::from(5.0), 10, 2);
        assert!(past_end.is_empty());
    }
}
