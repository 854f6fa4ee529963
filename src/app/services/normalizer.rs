//! Per-cell normalization for export tables.
//!
//! Pure functions applied to every textual and quantity cell before any
//! matching happens: whitespace collapsing for text, integer coercion for
//! quantities, and string coercion for join-key columns. None of these
//! touch state or perform I/O.

use crate::app::models::Cell;

/// Collapse any run of whitespace to a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a single cell
///
/// Text cells get their whitespace collapsed; non-text cells pass through
/// unchanged.
pub fn normalize_cell(cell: Cell) -> Cell {
    match cell {
        Cell::Text(text) => Cell::Text(collapse_whitespace(&text)),
        other => other,
    }
}

/// Coerce a quantity cell to an integer
///
/// Parses the cell as a number and truncates toward zero; unparseable or
/// missing values coerce to 0, matching the upstream reports where an empty
/// quantity means "none on hand".
pub fn coerce_quantity(cell: &Cell) -> i64 {
    match cell {
        Cell::Number(value) => *value as i64,
        Cell::Text(text) => text
            .trim()
            .parse::<f64>()
            .map(|value| value as i64)
            .unwrap_or(0),
        Cell::Empty => 0,
    }
}

/// Coerce a join-key cell to a string
///
/// Decoded cells are text, so codes keep their exact lexical form ("007"
/// stays "007"). Number cells only occur in tables built in memory; an
/// integral number renders without a decimal point so it cannot come out as
/// "100.0". Absent values become the empty string.
pub fn key_string(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => collapse_whitespace(text),
        Cell::Number(value) => {
            if value.fract() == 0.0 && value.abs() < 1e15 {
                format!("{}", *value as i64)
            } else {
                value.to_string()
            }
        }
        Cell::Empty => String::new(),
    }
}
