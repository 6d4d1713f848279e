//! Per-token type coercion for Avida data rows
//!
//! Tokens carry no schema; each one is coerced independently at parse time.
//! The `(none)` sentinel becomes null, numeric-looking tokens become numbers,
//! and anything else keeps its original text.

use crate::app::models::CellValue;
use crate::constants::NONE_SENTINEL;

/// Coerce one raw token into a cell value
///
/// Integer parsing is tried before float so that whole numbers render without
/// a fractional part in the output. Non-finite float parses (`inf`, `NaN`)
/// fall back to text since JSON has no representation for them.
pub fn coerce_token(token: &str) -> CellValue {
    if token == NONE_SENTINEL {
        return CellValue::Null;
    }

    if let Ok(integer) = token.parse::<i64>() {
        return CellValue::Integer(integer);
    }

    if let Ok(float) = token.parse::<f64>() {
        if float.is_finite() {
            return CellValue::Float(float);
        }
    }

    CellValue::Text(token.to_string())
}
