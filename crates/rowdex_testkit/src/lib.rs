//! # rowdex testkit
//!
//! Test utilities for rowdex.
//!
//! This crate provides:
//! - Deterministic fixtures (a small book table)
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use rowdex_testkit::prelude::*;
//! use rowdex_core::{Index, RowId, SignatureType};
//!
//! let mut index = Index::new(["author"], SignatureType::String, false).unwrap();
//! for (position, row) in book_rows().iter().enumerate() {
//!     index.add_row(row, RowId::new(position as u64));
//! }
//! assert_eq!(index.key_occurrence_count(), 4);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::fixtures::{book_rows, row_from_json};
    pub use crate::generators::{
        field_name_strategy, number_value_strategy, row_id_strategy, row_strategy,
        scalar_strategy, signature_type_strategy, text_value_strategy, value_strategy,
    };
}
