//! Data models for Avida conversion
//!
//! This module contains the core data structures for representing parsed data
//! rows: the per-cell scalar value and the ordered field-to-value record that
//! becomes one JSON object.

use serde::Serialize;
use serde::ser::SerializeMap;

// =============================================================================
// Cell Values
// =============================================================================

/// A single scalar value parsed from one data-row token
///
/// The variant is decided per token at parse time, not by a schema: the
/// `(none)` sentinel becomes [`CellValue::Null`], numeric-looking tokens become
/// numbers, and everything else stays text. Serialized untagged, so JSON sees
/// plain `null`, numbers, and strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Absent value, rendered as JSON null
    Null,
    /// Whole-number value, rendered without a fractional part
    Integer(i64),
    /// Floating-point value
    Float(f64),
    /// Uncoerced original token text
    Text(String),
}

impl CellValue {
    /// Whether this value is the null sentinel
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

// =============================================================================
// Records
// =============================================================================

/// One data row as an ordered mapping from field name to value
///
/// Keys keep their first-insertion position; inserting a duplicate field name
/// overwrites the earlier value in place. Cardinality is at most the header's
/// field count, and can be lower for short rows whose trailing fields are
/// simply absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Insert a field, overwriting any earlier value under the same name
    pub fn insert(&mut self, name: impl Into<String>, value: CellValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Look up a field value by name
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Number of fields present in this record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record holds no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
