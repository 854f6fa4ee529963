//! Core data structures for inventory reconciliation.
//!
//! Defines the untyped cell and table shapes produced by the table codec,
//! the normalized intermediate record both adapters emit, and the
//! discrepancy record the reconciler produces.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Inventory sources taking part in a reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// ERP export ("1C"), uploaded first
    Erp,
    /// Warehouse-management export ("СОЛВО"), uploaded second
    Wms,
}

impl Source {
    /// Display name used in error messages and log lines
    pub fn name(&self) -> &'static str {
        match self {
            Source::Erp => constants::ERP_SOURCE_NAME,
            Source::Wms => constants::WMS_SOURCE_NAME,
        }
    }

    /// Sentinel rendered when this side contributed no matching key
    pub fn no_data_sentinel(&self) -> &'static str {
        match self {
            Source::Erp => constants::NO_DATA_ERP,
            Source::Wms => constants::NO_DATA_WMS,
        }
    }
}

/// A single untyped cell as decoded from an export
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// Build a cell from a raw decoded field
    ///
    /// The lexical form is preserved: a numeric-looking code like "007"
    /// stays text with its leading zeros intact. Numeric parsing happens
    /// later, only where a quantity is expected; `Number` cells exist for
    /// tables built in memory, such as the report.
    pub fn from_field(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(raw.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// An ordered table of untyped cells, immutable once decoded
///
/// Column labels come from the export's first row; unlabeled columns are
/// assigned positional `Unnamed: {index}` placeholders so the ERP rename
/// table can address them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table holds no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by label, if present
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// Cell at (row, column index), `Empty` when the row is ragged
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&Cell::Empty)
    }
}

/// Composite join key: (product code, article code, category)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    pub product_code: String,
    pub article_code: String,
    pub category: String,
}

/// One product row in the common intermediate schema
///
/// Key fields are trimmed, whitespace-collapsed strings and never null;
/// absent source values become empty strings. Quantity is always a
/// well-defined integer after adaptation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub product_code: String,
    pub article_code: String,
    pub name: String,
    pub category: String,
    pub quantity: i64,
}

impl NormalizedRecord {
    /// The composite key this record joins on
    pub fn key(&self) -> RecordKey {
        RecordKey {
            product_code: self.product_code.clone(),
            article_code: self.article_code.clone(),
            category: self.category.clone(),
        }
    }
}

/// A reported quantity, or the marker that the side had no matching key
///
/// `NoData` is distinct from a genuine reported quantity of zero; it renders
/// as the side's "no data" sentinel in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantitySide {
    Value(i64),
    NoData,
}

impl QuantitySide {
    /// The quantity used for delta arithmetic (absent counts as zero)
    pub fn numeric(&self) -> i64 {
        match self {
            QuantitySide::Value(v) => *v,
            QuantitySide::NoData => 0,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, QuantitySide::Value(_))
    }

    /// Render for the report, substituting the side's sentinel when absent
    pub fn display(&self, source: Source) -> String {
        match self {
            QuantitySide::Value(v) => v.to_string(),
            QuantitySide::NoData => source.no_data_sentinel().to_string(),
        }
    }
}

/// One row of the discrepancy report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscrepancyRecord {
    pub product_code: String,
    pub article_code: String,
    pub name: String,
    pub category: String,
    pub erp_quantity: QuantitySide,
    pub wms_quantity: QuantitySide,
    pub delta: i64,
}

/// Successful outcome of a reconciliation run
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileOutcome {
    /// Discrepancies were found; the encoded report is ready for delivery
    Report { bytes: Vec<u8>, rows: usize },
    /// The two sides agree everywhere; a success, not an error
    NoDiscrepancies,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_from_field_preserves_lexical_form() {
        assert_eq!(Cell::from_field("10"), Cell::Text("10".to_string()));
        assert_eq!(Cell::from_field("007"), Cell::Text("007".to_string()));
        assert_eq!(Cell::from_field("Widget"), Cell::Text("Widget".to_string()));
    }

    #[test]
    fn test_cell_from_field_blank_is_empty() {
        assert_eq!(Cell::from_field(""), Cell::Empty);
        assert_eq!(Cell::from_field("   "), Cell::Empty);
    }

    #[test]
    fn test_raw_table_ragged_row_reads_empty() {
        let table = RawTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![Cell::Number(1.0)]],
        );
        assert_eq!(table.cell(0, 0), &Cell::Number(1.0));
        assert_eq!(table.cell(0, 1), &Cell::Empty);
        assert_eq!(table.cell(5, 0), &Cell::Empty);
    }

    #[test]
    fn test_quantity_side_numeric_and_display() {
        assert_eq!(QuantitySide::Value(7).numeric(), 7);
        assert_eq!(QuantitySide::NoData.numeric(), 0);
        assert_eq!(QuantitySide::Value(7).display(Source::Erp), "7");
        assert_eq!(
            QuantitySide::NoData.display(Source::Wms),
            crate::constants::NO_DATA_WMS
        );
    }
}
