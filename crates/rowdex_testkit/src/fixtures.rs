//! Deterministic test fixtures: a small book table.

use rowdex_core::Row;

/// Builds a row from a JSON object literal.
///
/// # Panics
///
/// Panics on malformed JSON; fixtures are test input.
#[must_use]
pub fn row_from_json(json: &str) -> Row {
    serde_json::from_str(json).expect("invalid fixture JSON")
}

/// A small book table with string, numeric, list and prose fields.
///
/// Row IDs are conventionally the positions in this vector.
#[must_use]
pub fn book_rows() -> Vec<Row> {
    vec![
        row_from_json(
            r#"{"author": "Tolkien", "title": "The Two Towers", "volumes": 3,
                "tags": ["fantasy", "classic"]}"#,
        ),
        row_from_json(
            r#"{"author": "Milne", "title": "Winnie the Pooh", "volumes": 1,
                "tags": ["children", "classic"]}"#,
        ),
        row_from_json(
            r#"{"author": "Asimov", "title": "Foundation", "volumes": 1,
                "tags": ["scifi"]}"#,
        ),
        row_from_json(
            r#"{"author": "Verne", "title": "Around the World in Eighty Days",
                "volumes": 2, "tags": ["adventure", "classic"]}"#,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowdex_core::Value;

    #[test]
    fn book_rows_share_one_shape() {
        let rows = book_rows();
        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert!(row.contains_field("author"));
            assert!(row.contains_field("title"));
            assert!(row.contains_field("volumes"));
            assert!(row.contains_field("tags"));
        }
        assert_eq!(rows[0].get("volumes"), Some(&Value::Number(3.0)));
    }
}
