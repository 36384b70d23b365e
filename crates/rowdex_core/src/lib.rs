//! # rowdex core
//!
//! Secondary indices over an in-memory table of rows.
//!
//! A row is a mapping from field name to a primitive (or
//! array-of-primitives) value. An index derives one or many keys from
//! each row through a [`RowSignature`] and associates them with
//! caller-supplied row IDs, answering exact-match point lookups and
//! ordered range lookups.
//!
//! This crate provides:
//! - [`MixedRadixCounter`]: variable-base odometer for combination
//!   enumeration and composite numeric-key packing
//! - [`Combinations`]: cross products over per-field candidate lists
//! - [`RowSignature`]: per-index key derivation for four strategies
//!   (string, number, array, full-text)
//! - [`Index`]: multiplicity-aware ordered key storage with point and
//!   range queries
//!
//! ## Example
//!
//! ```rust
//! use rowdex_core::{Index, IndexKey, Row, RowId, SignatureType};
//!
//! let mut index = Index::new(["author"], SignatureType::String, false).unwrap();
//! index.add_row(&Row::new().set("author", "Tolkien"), RowId::new(0));
//! index.add_row(&Row::new().set("author", "Tolkien"), RowId::new(5));
//!
//! let found = index.row_ids_for_keys(&[IndexKey::from("Tolkien")]);
//! assert_eq!(found.len(), 2);
//! ```
//!
//! The crate is single-threaded, synchronous and purely computational:
//! no I/O, no persistence, no transactions. Hosts embedding it in a
//! concurrent setting must serialize all calls against a given index.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod combine;
mod counter;
mod error;
mod index;
mod signature;
mod types;

pub use combine::Combinations;
pub use counter::MixedRadixCounter;
pub use error::{IndexError, IndexResult};
pub use index::{Index, OrderedKeys, RowIdLookup};
pub use signature::{
    RowSignature, SignatureType, FIELD_SEPARATOR, NUMERIC_FIELD_BASE, TYPE_SEPARATOR,
};
pub use types::{IndexKey, Row, RowId, Scalar, Value};
