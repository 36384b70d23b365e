//! Property-based test generators using proptest.
//!
//! Provides strategies for generating rows, values and signatures
//! that maintain the invariants the core expects.

use proptest::prelude::*;
use rowdex_core::{Row, RowId, Scalar, SignatureType, Value};

/// Strategy for generating row IDs.
pub fn row_id_strategy() -> impl Strategy<Value = RowId> {
    any::<u64>().prop_map(RowId::new)
}

/// Strategy for generating valid field names.
pub fn field_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,15}").expect("Invalid regex")
}

/// Strategy for generating text cell content.
///
/// Word-shaped text with the occasional space, so full-text
/// tokenization has material to work on.
pub fn text_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9]{1,8}( [A-Za-z0-9]{1,8}){0,3}")
        .expect("Invalid regex")
}

/// Strategy for generating numeric cell content.
///
/// Bounded integers, so composite packing stays within the exact
/// integer range of a double.
pub fn number_value_strategy() -> impl Strategy<Value = f64> {
    (0i64..1_000_000).prop_map(|n| n as f64)
}

/// Strategy for generating primitive scalars.
pub fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        text_value_strategy().prop_map(Scalar::Text),
        number_value_strategy().prop_map(Scalar::Number),
    ]
}

/// Strategy for generating cell values, lists included.
pub fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        text_value_strategy().prop_map(Value::Text),
        number_value_strategy().prop_map(Value::Number),
        prop::collection::vec(scalar_strategy(), 1..4).prop_map(Value::List),
    ]
}

/// Strategy for generating a row over a fixed field set.
pub fn row_strategy(field_names: Vec<String>) -> impl Strategy<Value = Row> {
    let fields = field_names.len();
    prop::collection::vec(value_strategy(), fields).prop_map(move |values| {
        field_names
            .iter()
            .cloned()
            .zip(values)
            .collect::<Row>()
    })
}

/// Strategy for generating a signature type.
pub fn signature_type_strategy() -> impl Strategy<Value = SignatureType> {
    prop_oneof![
        Just(SignatureType::String),
        Just(SignatureType::Number),
        Just(SignatureType::Array),
        Just(SignatureType::FullText),
    ]
}
