//! Core type definitions: rows, cell values, row identifiers and index keys.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque identifier for a row.
///
/// Row IDs are assigned by the owning table layer. The index never
/// generates or interprets them; it only associates them with keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowId(pub u64);

impl RowId {
    /// Creates a row ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row:{}", self.0)
    }
}

impl From<u64> for RowId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A primitive cell value: text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Text value.
    Text(String),
    /// Numeric value.
    Number(f64),
}

impl Scalar {
    /// Returns the text content, if this is a text scalar.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Returns the numeric content, if this is a number scalar.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A row cell value.
///
/// `List` only carries meaning for fan-out signature types
/// (array and full-text), where it holds the candidate values a
/// single row contributes to key generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Text value.
    Text(String),
    /// Numeric value.
    Number(f64),
    /// List of primitives (fan-out types only).
    List(Vec<Scalar>),
}

impl Value {
    /// Returns the text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content, if this is a number value.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the list content, if this is a list value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Vec<Scalar>> for Value {
    fn from(items: Vec<Scalar>) -> Self {
        Self::List(items)
    }
}

/// One table row: a mapping from field name to cell value.
///
/// Rows are consumed, never stored; the index derives keys from them
/// and keeps only the keys and the caller's row IDs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, Value>);

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, consuming and returning the row for chaining.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Tells whether the row has a field of the given name.
    ///
    /// Only presence counts; the value is not inspected.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns the row's field names.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<String, Value>> for Row {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self(fields)
    }
}

/// A key an index stores rows under.
///
/// String, array and full-text signatures produce text keys; number
/// signatures produce numeric keys. A computed key is never null.
///
/// Numeric keys order by [`f64::total_cmp`] and hash by bit pattern,
/// which keeps `Eq`, `Ord` and `Hash` mutually consistent. Numbers
/// sort before text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexKey {
    /// Numeric key.
    Number(f64),
    /// Text key.
    Text(String),
}

impl PartialEq for IndexKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for IndexKey {}

impl PartialOrd for IndexKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IndexKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl Hash for IndexKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(n) => {
                0u8.hash(state);
                n.to_bits().hash(state);
            }
            Self::Text(s) => {
                1u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for IndexKey {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for IndexKey {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for IndexKey {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_id_display() {
        let id = RowId::new(42);
        assert_eq!(format!("{id}"), "row:42");
    }

    #[test]
    fn row_presence_ignores_value() {
        let row = Row::new().set("author", "Tolkien").set("volumes", 3.0);
        assert!(row.contains_field("author"));
        assert!(row.contains_field("volumes"));
        assert!(!row.contains_field("title"));
    }

    #[test]
    fn row_from_json() {
        let row: Row =
            serde_json::from_str(r#"{"author": "Tolkien", "volumes": 3, "tags": ["x", "y"]}"#)
                .unwrap();
        assert_eq!(row.get("author"), Some(&Value::Text("Tolkien".into())));
        assert_eq!(row.get("volumes"), Some(&Value::Number(3.0)));
        assert_eq!(
            row.get("tags"),
            Some(&Value::List(vec!["x".into(), "y".into()]))
        );
    }

    #[test]
    fn key_ordering_numbers_before_text() {
        let mut keys = vec![
            IndexKey::from("b"),
            IndexKey::from(2.0),
            IndexKey::from("a"),
            IndexKey::from(1.0),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                IndexKey::from(1.0),
                IndexKey::from(2.0),
                IndexKey::from("a"),
                IndexKey::from("b"),
            ]
        );
    }

    #[test]
    fn numeric_key_equality_is_bitwise() {
        assert_eq!(IndexKey::from(1.0), IndexKey::from(1.0));
        assert_ne!(IndexKey::from(0.0), IndexKey::from(-0.0));
    }
}
