//! Tests for the ERP adapter

use super::{erp_table, row};
use crate::app::models::RawTable;
use crate::app::services::source_adapter::adapt_erp_table;
use crate::config::Config;

fn framing() -> crate::config::FramingConfig {
    Config::default().erp
}

#[test]
fn test_adapts_basic_export() {
    let table = erp_table(8, &[("A1", "100", "Widget", "Хранение 45", "10")]);
    let records = adapt_erp_table(&table, &framing()).unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.article_code, "A1");
    assert_eq!(record.product_code, "100");
    assert_eq!(record.name, "Widget");
    assert_eq!(record.category, "Хранение 45");
    assert_eq!(record.quantity, 10);
}

#[test]
fn test_strips_leading_header_rows() {
    let table = erp_table(8, &[("A1", "100", "Widget", "Хранение 45", "10")]);
    // 8 filler rows + 1 data row in, exactly 1 record out
    assert_eq!(table.row_count(), 9);
    let records = adapt_erp_table(&table, &framing()).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_numeric_codes_become_strings() {
    let table = erp_table(8, &[("123", "100", "Widget", "Хранение 45", "10")]);
    let records = adapt_erp_table(&table, &framing()).unwrap();

    // Codes must not pick up a float rendering or leading-zero loss
    assert_eq!(records[0].article_code, "123");
    assert_eq!(records[0].product_code, "100");
}

#[test]
fn test_codes_keep_leading_zeros() {
    let table = erp_table(8, &[("A1", "007", "Widget", "Хранение 45", "10")]);
    let records = adapt_erp_table(&table, &framing()).unwrap();

    // A code like "007" is an identifier, not the number 7
    assert_eq!(records[0].product_code, "007");
}

#[test]
fn test_non_numeric_quantity_coerces_to_zero() {
    let table = erp_table(8, &[("A1", "100", "Widget", "Хранение 45", "оборот")]);
    let records = adapt_erp_table(&table, &framing()).unwrap();
    assert_eq!(records[0].quantity, 0);
}

#[test]
fn test_blank_separator_rows_are_skipped() {
    let table = erp_table(
        8,
        &[
            ("A1", "100", "Widget", "Хранение 45", "10"),
            ("", "", "", "", ""),
            ("A2", "200", "Gadget", "Хранение 45", "5"),
        ],
    );
    let records = adapt_erp_table(&table, &framing()).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn test_missing_quantity_column_is_schema_mismatch() {
    // Seven columns only: the quantity placeholder "Unnamed: 7" never appears
    let columns: Vec<String> = (0..7).map(|i| format!("Unnamed: {}", i)).collect();
    let rows = vec![row(&["A1", "x", "x", "100", "Widget", "x", "Хранение 45"])];
    let table = RawTable::new(columns, rows);

    let result = adapt_erp_table(&table, &framing());
    assert!(matches!(result, Err(crate::Error::SchemaMismatch { .. })));
}

#[test]
fn test_whitespace_in_names_is_collapsed() {
    let table = erp_table(8, &[("A1", "100", "Widget   Mk  II", "Хранение 45", "10")]);
    let records = adapt_erp_table(&table, &framing()).unwrap();
    assert_eq!(records[0].name, "Widget Mk II");
}
