//! Data-row to record conversion
//!
//! Pairs row tokens with derived field names positionally, left to right,
//! stopping at the shorter of the two sequences. Missing fields are assumed to
//! be trailing (some `.spop` rows drop columns when organisms are dead), so
//! short rows simply omit their trailing fields rather than padding with null.

use super::field_parsers::coerce_token;
use super::header::FieldSchema;
use crate::app::models::Record;

/// Parse one trimmed, non-comment data line into a record
///
/// Splits on single-space boundaries, exactly as Avida writes the rows;
/// consecutive spaces therefore yield empty tokens, which coerce to empty
/// text. Extra tokens beyond the field count are silently dropped.
pub fn parse_row(line: &str, schema: &FieldSchema) -> Record {
    let mut record = Record::new();

    for (name, token) in schema.names().iter().zip(line.split(' ')) {
        record.insert(name.clone(), coerce_token(token));
    }

    record
}
