//! Key → row-ID multimap.

use crate::types::{IndexKey, RowId};
use std::collections::{HashMap, HashSet};

/// Associates index keys with the row IDs that produced them.
///
/// One key may reference many row IDs, and the same (key, row ID)
/// pair may occur more than once — a full-text row repeating a word
/// contributes one association per occurrence. Removal takes exactly
/// one occurrence, which is what keeps add/remove an inverse pair.
#[derive(Debug, Clone, Default)]
pub struct RowIdLookup {
    entries: HashMap<IndexKey, Vec<RowId>>,
}

impl RowIdLookup {
    /// Creates an empty multimap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no associations are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds one (key, row ID) association.
    pub fn insert(&mut self, key: IndexKey, row_id: RowId) {
        self.entries.entry(key).or_default().push(row_id);
    }

    /// Removes one occurrence of a (key, row ID) association.
    ///
    /// Returns false if the pair is not present. A key with no
    /// remaining associations leaves the map.
    pub fn remove(&mut self, key: &IndexKey, row_id: RowId) -> bool {
        let Some(row_ids) = self.entries.get_mut(key) else {
            return false;
        };
        let Some(position) = row_ids.iter().position(|id| *id == row_id) else {
            return false;
        };
        row_ids.remove(position);
        if row_ids.is_empty() {
            self.entries.remove(key);
        }
        true
    }

    /// Returns the row IDs associated with a key, with multiplicity.
    #[must_use]
    pub fn row_ids(&self, key: &IndexKey) -> &[RowId] {
        self.entries.get(key).map_or(&[], Vec::as_slice)
    }

    /// Returns the unique row IDs across all of the given keys.
    ///
    /// Set union, then collapse: a row ID reachable through several
    /// keys appears once.
    #[must_use]
    pub fn unique_row_ids<'a, I>(&self, keys: I) -> HashSet<RowId>
    where
        I: IntoIterator<Item = &'a IndexKey>,
    {
        let mut result = HashSet::new();
        for key in keys {
            result.extend(self.row_ids(key).iter().copied());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut lookup = RowIdLookup::new();
        lookup.insert(IndexKey::from("Tolkien"), RowId::new(0));
        lookup.insert(IndexKey::from("Tolkien"), RowId::new(5));

        assert_eq!(
            lookup.row_ids(&IndexKey::from("Tolkien")),
            &[RowId::new(0), RowId::new(5)]
        );
        assert!(lookup.row_ids(&IndexKey::from("Verne")).is_empty());
    }

    #[test]
    fn remove_takes_one_occurrence() {
        let mut lookup = RowIdLookup::new();
        lookup.insert(IndexKey::from("rust"), RowId::new(1));
        lookup.insert(IndexKey::from("rust"), RowId::new(1));

        assert!(lookup.remove(&IndexKey::from("rust"), RowId::new(1)));
        assert_eq!(lookup.row_ids(&IndexKey::from("rust")), &[RowId::new(1)]);

        assert!(lookup.remove(&IndexKey::from("rust"), RowId::new(1)));
        assert!(lookup.is_empty());

        assert!(!lookup.remove(&IndexKey::from("rust"), RowId::new(1)));
    }

    #[test]
    fn unique_row_ids_deduplicates_across_keys() {
        let mut lookup = RowIdLookup::new();
        lookup.insert(IndexKey::from("a"), RowId::new(1));
        lookup.insert(IndexKey::from("a"), RowId::new(2));
        lookup.insert(IndexKey::from("b"), RowId::new(2));
        lookup.insert(IndexKey::from("b"), RowId::new(3));

        let keys = [IndexKey::from("a"), IndexKey::from("b")];
        let unique = lookup.unique_row_ids(&keys);
        assert_eq!(
            unique,
            HashSet::from([RowId::new(1), RowId::new(2), RowId::new(3)])
        );
    }
}
