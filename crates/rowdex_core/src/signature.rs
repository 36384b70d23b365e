//! Row signatures: the per-index rules for deriving keys from rows.

use crate::combine::Combinations;
use crate::counter::MixedRadixCounter;
use crate::error::{IndexError, IndexResult};
use crate::types::{IndexKey, Row, Scalar, Value};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Separator between encoded field values in composite text keys.
///
/// Must be escaped by the key encoding so field values can never
/// collide with the separator.
pub const FIELD_SEPARATOR: &str = "|";

/// Separator between the field list and the type name in a field signature.
pub const TYPE_SEPARATOR: &str = "%";

/// Uniform radix for packing numeric fields into one composite key.
///
/// Packing quasi-shifts each field value by 32 bits. Composite numeric
/// keys are exact only while the packed magnitude stays within the
/// double's 53-bit integer range; beyond that, keys silently alias.
pub const NUMERIC_FIELD_BASE: f64 = 4_294_967_296.0;

/// Bytes percent-encoded in key material.
///
/// Mirrors the reserved set of URI encoding: controls, space, and
/// `"%<>[\]^`{|}` — the field separator `|` is in the set.
const KEY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Key-generation strategy of a signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SignatureType {
    /// One text key per row; composite fields join on the separator.
    #[default]
    String,
    /// One numeric key per row; composite fields pack into one number.
    Number,
    /// Fan-out: each field's list value enumerates candidate values.
    Array,
    /// Fan-out: each field's text value tokenizes into word candidates.
    FullText,
}

impl SignatureType {
    /// Canonical name of the type, as used in field signatures.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Array => "array",
            Self::FullText => "fullText",
        }
    }

    /// Tells whether rows of this type fan out into multiple keys.
    #[must_use]
    pub const fn is_fan_out(self) -> bool {
        matches!(self, Self::Array | Self::FullText)
    }
}

impl fmt::Display for SignatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureType {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "array" => Ok(Self::Array),
            "fullText" => Ok(Self::FullText),
            other => Err(IndexError::invalid_signature(format!(
                "unrecognized signature type: {other}"
            ))),
        }
    }
}

/// Immutable key-derivation rules for one index.
///
/// A signature is an ordered set of unique field names, a
/// [`SignatureType`] and a case-sensitivity flag. It decides which
/// key(s) a given row is stored under, and carries a canonical
/// [`field_signature`](Self::field_signature) string identifying the
/// index shape to the owning table layer.
#[derive(Debug, Clone)]
pub struct RowSignature {
    field_names: Vec<String>,
    field_lookup: HashSet<String>,
    signature_type: SignatureType,
    case_insensitive: bool,
    field_signature: String,
}

impl RowSignature {
    /// Creates a signature over the given fields.
    ///
    /// The field list must be non-empty and free of duplicates; any
    /// violation fails with [`IndexError::InvalidSignature`] before
    /// derived state is computed.
    pub fn new<I, S>(
        field_names: I,
        signature_type: SignatureType,
        case_insensitive: bool,
    ) -> IndexResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field_names: Vec<String> = field_names.into_iter().map(Into::into).collect();
        if field_names.is_empty() {
            return Err(IndexError::invalid_signature("empty field name list"));
        }
        let mut field_lookup = HashSet::with_capacity(field_names.len());
        for name in &field_names {
            if !field_lookup.insert(name.clone()) {
                return Err(IndexError::invalid_signature(format!(
                    "duplicate field name: {name}"
                )));
            }
        }

        let encoded: Vec<String> = field_names
            .iter()
            .map(|name| encode_text(name, case_insensitive))
            .collect();
        let field_signature = format!(
            "{}{TYPE_SEPARATOR}{signature_type}",
            encoded.join(FIELD_SEPARATOR)
        );

        Ok(Self {
            field_names,
            field_lookup,
            signature_type,
            case_insensitive,
            field_signature,
        })
    }

    /// Returns the signature's field names, in order.
    #[must_use]
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Returns the key-generation strategy.
    #[must_use]
    pub fn signature_type(&self) -> SignatureType {
        self.signature_type
    }

    /// Tells whether key material is case-folded.
    #[must_use]
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Returns the canonical identity of the index shape.
    ///
    /// A pure function of (field order, type, case flag): the encoded,
    /// optionally case-folded field names joined by the field
    /// separator, then the type separator and the type name.
    /// Reordering fields changes it. Never changes after construction.
    #[must_use]
    pub fn field_signature(&self) -> &str {
        &self.field_signature
    }

    /// Tells whether every signature field is present on the row.
    ///
    /// Presence only; values and extra row fields are ignored. This is
    /// the applicability gate for single-key strategies.
    #[must_use]
    pub fn contained_by_row(&self, row: &Row) -> bool {
        self.field_names
            .iter()
            .all(|name| row.contains_field(name))
    }

    /// Tells whether every row field is one of the signature's.
    ///
    /// The dual of [`contained_by_row`](Self::contained_by_row), used
    /// to test full-shape compatibility.
    #[must_use]
    pub fn contains_row(&self, row: &Row) -> bool {
        row.field_names()
            .all(|name| self.field_lookup.contains(name))
    }

    /// Derives the single key the row yields, for string and number
    /// signatures.
    ///
    /// Returns `None` when the row does not contain every signature
    /// field, or when a field value has the wrong primitive type for
    /// the strategy.
    ///
    /// # Panics
    ///
    /// Panics for fan-out signature types; those produce multiple keys
    /// through [`keys_for_row`](Self::keys_for_row).
    #[must_use]
    pub fn key_for_row(&self, row: &Row) -> Option<IndexKey> {
        if !self.contained_by_row(row) {
            return None;
        }
        match self.signature_type {
            SignatureType::String => {
                let mut encoded = Vec::with_capacity(self.field_names.len());
                for name in &self.field_names {
                    let text = row.get(name).and_then(Value::as_text)?;
                    encoded.push(self.encode(text));
                }
                Some(IndexKey::Text(encoded.join(FIELD_SEPARATOR)))
            }
            SignatureType::Number => {
                let digits: Vec<f64> = self
                    .field_names
                    .iter()
                    .map(|name| row.get(name).and_then(Value::as_number))
                    .collect::<Option<_>>()?;
                if let [value] = digits.as_slice() {
                    return Some(IndexKey::Number(*value));
                }
                let mut counter =
                    MixedRadixCounter::uniform(digits.len(), NUMERIC_FIELD_BASE);
                let scalar = match counter.set_digits(&digits) {
                    Ok(counter) => counter.scalar(),
                    Err(_) => unreachable!("digit count is fixed by the field count"),
                };
                Some(IndexKey::Number(scalar))
            }
            SignatureType::Array | SignatureType::FullText => {
                unreachable!("fan-out signatures produce multiple keys; use keys_for_row")
            }
        }
    }

    /// Derives every key the row yields under this signature.
    ///
    /// An empty row yields no keys. Fan-out types enumerate one
    /// candidate list per field — the field's list value for array
    /// signatures, its whitespace-tokenized text for full-text — and
    /// emit the full cross product, combinations joined by the field
    /// separator. A missing field, a wrongly typed value or an empty
    /// candidate list yields no keys (∏cᵢ = 0). String and number
    /// types delegate to [`key_for_row`](Self::key_for_row).
    #[must_use]
    pub fn keys_for_row(&self, row: &Row) -> Vec<IndexKey> {
        if row.is_empty() {
            return Vec::new();
        }
        if !self.signature_type.is_fan_out() {
            return self.key_for_row(row).into_iter().collect();
        }

        let Some(mut lists) = self.candidate_lists(row) else {
            return Vec::new();
        };
        if lists.len() == 1 {
            return lists
                .swap_remove(0)
                .into_iter()
                .map(IndexKey::Text)
                .collect();
        }
        let combinations = match Combinations::new(lists) {
            Ok(combinations) => combinations,
            Err(_) => unreachable!("candidate lists are checked non-empty"),
        };
        combinations
            .all()
            .into_iter()
            .map(|combination| IndexKey::Text(combination.join(FIELD_SEPARATOR)))
            .collect()
    }

    /// Builds one encoded candidate list per signature field.
    ///
    /// `None` when any field is missing, wrongly typed or yields no
    /// candidates.
    fn candidate_lists(&self, row: &Row) -> Option<Vec<Vec<String>>> {
        let mut lists = Vec::with_capacity(self.field_names.len());
        for name in &self.field_names {
            let value = row.get(name)?;
            let candidates: Vec<String> = match self.signature_type {
                SignatureType::Array => value
                    .as_list()?
                    .iter()
                    .map(|scalar| self.encode_scalar(scalar))
                    .collect(),
                SignatureType::FullText => value
                    .as_text()?
                    .split_whitespace()
                    .map(|word| self.encode(word))
                    .collect(),
                SignatureType::String | SignatureType::Number => {
                    unreachable!("single-key signatures have no candidate lists")
                }
            };
            if candidates.is_empty() {
                return None;
            }
            lists.push(candidates);
        }
        Some(lists)
    }

    /// Percent-encodes (and optionally case-folds) text key material.
    fn encode(&self, raw: &str) -> String {
        encode_text(raw, self.case_insensitive)
    }

    /// Encodes one candidate value: text encoded, numbers stringified.
    fn encode_scalar(&self, scalar: &Scalar) -> String {
        match scalar {
            Scalar::Text(text) => self.encode(text),
            Scalar::Number(number) => number.to_string(),
        }
    }
}

fn encode_text(raw: &str, case_insensitive: bool) -> String {
    if case_insensitive {
        utf8_percent_encode(&raw.to_lowercase(), KEY_ENCODE_SET).to_string()
    } else {
        utf8_percent_encode(raw, KEY_ENCODE_SET).to_string()
    }
}
