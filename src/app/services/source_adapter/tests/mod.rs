//! Tests for the source adapters

pub mod erp_tests;

use crate::app::models::{Cell, RawTable};

/// Build a row of cells from display strings, as the decoder would
pub fn row(fields: &[&str]) -> Vec<Cell> {
    fields.iter().map(|f| Cell::from_field(f)).collect()
}

/// Build an ERP-shaped table: ten unnamed columns, `leading` filler rows,
/// then the given data rows of (article, product, name, category, quantity)
pub fn erp_table(leading: usize, data: &[(&str, &str, &str, &str, &str)]) -> RawTable {
    let columns: Vec<String> = (0..10).map(|i| format!("Unnamed: {}", i)).collect();

    let mut rows: Vec<Vec<Cell>> = (0..leading)
        .map(|i| row(&[&format!("Отчет {}", i), "", "", "", "", "", "", "", "", ""]))
        .collect();

    for (article, product, name, category, quantity) in data {
        rows.push(row(&[
            article, "x", "x", product, name, "x", category, quantity, "0", "0",
        ]));
    }

    RawTable::new(columns, rows)
}

/// Build a WMS-shaped table: five positional columns, two junk rows on top,
/// three footer rows, data rows of (product, article, name, category, quantity)
pub fn wms_table(data: &[(&str, &str, &str, &str, &str)]) -> RawTable {
    let columns: Vec<String> = (0..5).map(|i| format!("col{}", i)).collect();

    let mut rows: Vec<Vec<Cell>> = vec![
        row(&["Отчет по остаткам", "", "", "", ""]),
        row(&["Склад", "", "", "", ""]),
    ];

    for (product, article, name, category, quantity) in data {
        rows.push(row(&[product, article, name, category, quantity]));
    }

    rows.push(row(&["Итого", "", "", "", "999"]));
    rows.push(row(&["", "", "", "", ""]));
    rows.push(row(&["Подпись", "", "", "", ""]));

    RawTable::new(columns, rows)
}
