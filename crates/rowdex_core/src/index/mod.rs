//! Secondary index: key → row-ID associations with point and range lookup.
//!
//! An [`Index`] owns a [`RowSignature`] deciding which key(s) each row
//! yields, a [`RowIdLookup`] multimap resolving keys to row IDs, and an
//! [`OrderedKeys`] multiset answering range queries. The multimap's key
//! domain and the ordered multiset always mirror each other: every key
//! present in one carries the same multiplicity in the other.

mod lookup;
mod ordered;

pub use lookup::RowIdLookup;
pub use ordered::OrderedKeys;

use crate::error::IndexResult;
use crate::signature::{RowSignature, SignatureType};
use crate::types::{IndexKey, Row, RowId};
use std::collections::HashSet;
use tracing::trace;

/// A secondary index over an in-memory table.
///
/// Constructed empty; [`add_row`](Self::add_row) and
/// [`remove_row`](Self::remove_row) are the only mutators. The index is
/// single-threaded: the two mutation steps (multimap and ordered
/// multiset) are not atomic with each other, so a concurrent host must
/// serialize all calls against a given index.
#[derive(Debug, Clone)]
pub struct Index {
    signature: RowSignature,
    lookup: RowIdLookup,
    sorted_keys: OrderedKeys,
}

impl Index {
    /// Creates an empty index over the given fields.
    ///
    /// Fails with [`IndexError::InvalidSignature`](crate::IndexError)
    /// on a malformed field list.
    pub fn new<I, S>(
        field_names: I,
        signature_type: SignatureType,
        case_insensitive: bool,
    ) -> IndexResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::from_signature(RowSignature::new(
            field_names,
            signature_type,
            case_insensitive,
        )?))
    }

    /// Creates an empty index from an existing signature.
    #[must_use]
    pub fn from_signature(signature: RowSignature) -> Self {
        Self {
            signature,
            lookup: RowIdLookup::new(),
            sorted_keys: OrderedKeys::new(),
        }
    }

    /// Returns the index's row signature.
    #[must_use]
    pub fn signature(&self) -> &RowSignature {
        &self.signature
    }

    /// Returns the canonical identity of the index shape.
    ///
    /// The owning table layer matches this against query shapes to
    /// decide whether the index can serve a query. Fixed for life.
    #[must_use]
    pub fn field_signature(&self) -> &str {
        self.signature.field_signature()
    }

    /// Returns the number of stored key occurrences.
    #[must_use]
    pub fn key_occurrence_count(&self) -> usize {
        self.sorted_keys.len()
    }

    /// Returns true if no rows are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted_keys.is_empty()
    }

    /// Returns all stored key occurrences in ascending order.
    #[must_use]
    pub fn sorted_keys(&self) -> &[IndexKey] {
        self.sorted_keys.as_slice()
    }

    /// Adds a row under every key its signature derives.
    ///
    /// A fan-out row occupies one multimap association and one ordered
    /// slot per generated key. A row that yields no keys leaves the
    /// index untouched.
    pub fn add_row(&mut self, row: &Row, row_id: RowId) {
        let keys = self.signature.keys_for_row(row);
        trace!(
            field_signature = self.field_signature(),
            %row_id,
            key_count = keys.len(),
            "adding row to index"
        );
        for key in keys {
            self.sorted_keys.insert(key.clone());
            self.lookup.insert(key, row_id);
        }
    }

    /// Removes a row by recomputing its key set.
    ///
    /// Exactly one association and one ordered occurrence are removed
    /// per key. The row must be the same content passed to the
    /// matching [`add_row`](Self::add_row); diverging content removes
    /// the wrong entries or none, and is not guarded against.
    pub fn remove_row(&mut self, row: &Row, row_id: RowId) {
        let keys = self.signature.keys_for_row(row);
        trace!(
            field_signature = self.field_signature(),
            %row_id,
            key_count = keys.len(),
            "removing row from index"
        );
        for key in keys {
            self.lookup.remove(&key, row_id);
            self.sorted_keys.remove(&key);
        }
    }

    /// Returns the unique row IDs associated with any of the keys.
    #[must_use]
    pub fn row_ids_for_keys(&self, keys: &[IndexKey]) -> HashSet<RowId> {
        self.lookup.unique_row_ids(keys)
    }

    /// Returns the unique row IDs whose key falls within
    /// `lower..=upper` (both bounds inclusive).
    #[must_use]
    pub fn row_ids_for_key_range(
        &self,
        lower: &IndexKey,
        upper: &IndexKey,
    ) -> HashSet<RowId> {
        self.row_ids_for_key_range_paged(lower, upper, 0, usize::MAX)
    }

    /// Range lookup with `offset`/`limit` pagination.
    ///
    /// Pagination applies to the ordered in-range key occurrences;
    /// duplicate keys then collapse before resolving to row IDs, and
    /// IDs are deduplicated across all keys in range.
    #[must_use]
    pub fn row_ids_for_key_range_paged(
        &self,
        lower: &IndexKey,
        upper: &IndexKey,
        offset: usize,
        limit: usize,
    ) -> HashSet<RowId> {
        let in_range = self.sorted_keys.range_paged(lower, upper, offset, limit);
        // the slice is sorted, so adjacent dedup collapses duplicates
        let mut unique_keys: Vec<&IndexKey> = Vec::new();
        for key in in_range {
            if unique_keys.last() != Some(&key) {
                unique_keys.push(key);
            }
        }
        self.lookup.unique_row_ids(unique_keys)
    }
}
