//! ERP (1C) export adapter.

use tracing::{debug, info};

use crate::app::models::{NormalizedRecord, RawTable, Source};
use crate::app::services::normalizer::{coerce_quantity, key_string};
use crate::config::FramingConfig;
use crate::constants::{ERP_COLUMN_RENAMES, ERP_DROPPED_COLUMNS, ERP_MANDATORY_COLUMNS, columns};
use crate::{Error, Result};

/// Adapt a raw ERP export to the common intermediate schema
///
/// The 1C report ships a decorative header block as data rows and leaves
/// most column labels blank, so the decoder hands us `Unnamed: {n}`
/// placeholders. This adapter renames those placeholders to the canonical
/// schema, discards the filler and reserved-stock columns, validates that
/// the four mandatory columns survived, and strips the leading header rows.
pub fn adapt_erp_table(table: &RawTable, framing: &FramingConfig) -> Result<Vec<NormalizedRecord>> {
    info!(
        "Adapting ERP table: {} columns, {} rows",
        table.column_count(),
        table.row_count()
    );

    // Rename positional placeholders, then drop the columns reconciliation
    // never reads. Each retained label keeps its original cell index.
    let retained: Vec<(String, usize)> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(index, label)| (rename_column(label), index))
        .filter(|(label, _)| !ERP_DROPPED_COLUMNS.contains(&label.as_str()))
        .collect();

    let missing: Vec<&str> = ERP_MANDATORY_COLUMNS
        .iter()
        .copied()
        .filter(|mandatory| !retained.iter().any(|(label, _)| label == mandatory))
        .collect();
    if !missing.is_empty() {
        return Err(Error::schema_mismatch(
            Source::Erp.name(),
            format!(
                "export is missing mandatory columns: {}",
                missing.join(", ")
            ),
        ));
    }

    let article_col = require_column(&retained, columns::ARTICLE)?;
    let product_col = require_column(&retained, columns::PRODUCT_CODE)?;
    let name_col = require_column(&retained, columns::NAME)?;
    let quantity_col = require_column(&retained, columns::QUANTITY)?;
    let category_col = retained
        .iter()
        .find(|(name, _)| name == columns::CATEGORY)
        .map(|(_, index)| *index);

    let mut records = Vec::new();
    for row in framing.leading_rows..table.row_count() {
        let article_code = key_string(table.cell(row, article_col));
        let product_code = key_string(table.cell(row, product_col));
        // Blank separator rows carry no key at all
        if article_code.is_empty() && product_code.is_empty() {
            continue;
        }

        records.push(NormalizedRecord {
            product_code,
            article_code,
            name: key_string(table.cell(row, name_col)),
            category: category_col
                .map(|col| key_string(table.cell(row, col)))
                .unwrap_or_default(),
            quantity: coerce_quantity(table.cell(row, quantity_col)),
        });
    }

    debug!("ERP adapter produced {} records", records.len());
    Ok(records)
}

/// Resolve a mandatory column's cell index
///
/// The mandatory-column check runs first, so a miss here means the check
/// list and the readers disagree; fail loudly rather than join on a
/// half-built key.
fn require_column(retained: &[(String, usize)], label: &str) -> Result<usize> {
    retained
        .iter()
        .find(|(name, _)| name == label)
        .map(|(_, index)| *index)
        .ok_or_else(|| {
            Error::schema_mismatch(
                Source::Erp.name(),
                format!("export is missing mandatory columns: {}", label),
            )
        })
}

/// Apply the fixed positional rename table to one column label
fn rename_column(label: &str) -> String {
    ERP_COLUMN_RENAMES
        .iter()
        .find(|(from, _)| *from == label)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or_else(|| label.to_string())
}
