//! Discrepancy report formatting.
//!
//! Orders the output columns, substitutes the absent-side sentinels, and
//! hands the result to the table codec for serialization.

use tracing::debug;

use crate::Result;
use crate::app::models::{Cell, DiscrepancyRecord, RawTable, Source};
use crate::app::services::table_codec::encode_table;
use crate::constants::{REPORT_COLUMN_ORDER, columns};

/// Build the report table in the agreed column order
///
/// Column order: ProductCode, ArticleCode, Name, Category, Quantity_ERP,
/// Quantity_WMS, Delta. A column the record shape cannot supply is omitted
/// rather than erroring.
pub fn build_report_table(records: &[DiscrepancyRecord]) -> RawTable {
    let labels: Vec<String> = REPORT_COLUMN_ORDER
        .iter()
        .filter(|label| report_cell(&sample_record(), label).is_some())
        .map(|label| label.to_string())
        .collect();

    let rows: Vec<Vec<Cell>> = records
        .iter()
        .map(|record| {
            labels
                .iter()
                .filter_map(|label| report_cell(record, label))
                .collect()
        })
        .collect();

    debug!(
        "Report table: {} columns, {} rows",
        labels.len(),
        rows.len()
    );
    RawTable::new(labels, rows)
}

/// Serialize the discrepancy records for delivery
pub fn render_report(records: &[DiscrepancyRecord]) -> Result<Vec<u8>> {
    encode_table(&build_report_table(records))
}

/// Cell value of one record under one report column label
fn report_cell(record: &DiscrepancyRecord, label: &str) -> Option<Cell> {
    let cell = match label {
        l if l == columns::PRODUCT_CODE => Cell::Text(record.product_code.clone()),
        l if l == columns::ARTICLE => Cell::Text(record.article_code.clone()),
        l if l == columns::NAME => Cell::Text(record.name.clone()),
        l if l == columns::CATEGORY => Cell::Text(record.category.clone()),
        l if l == columns::ERP_QUANTITY => Cell::Text(record.erp_quantity.display(Source::Erp)),
        l if l == columns::WMS_QUANTITY => Cell::Text(record.wms_quantity.display(Source::Wms)),
        l if l == columns::DELTA => Cell::Number(record.delta as f64),
        _ => return None,
    };
    Some(cell)
}

/// Placeholder record used to probe which columns the shape can supply
fn sample_record() -> DiscrepancyRecord {
    DiscrepancyRecord {
        product_code: String::new(),
        article_code: String::new(),
        name: String::new(),
        category: String::new(),
        erp_quantity: crate::app::models::QuantitySide::NoData,
        wms_quantity: crate::app::models::QuantitySide::NoData,
        delta: 0,
    }
}
