//! Category canonicalization and row exclusion for the ERP side.
//!
//! The ERP export names storage categories differently from the WMS; this
//! module rewrites them into the canonical vocabulary using the fixed rename
//! table, drops rows whose key column is accounting noise rather than a
//! product, and gates on the result actually containing a recognized
//! category; an empty intersection means the wrong report variant was
//! exported upstream.

use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::app::models::{NormalizedRecord, Source};
use crate::constants::REPORT_VARIANT_HINT;
use crate::{Error, Result};

/// Canonicalize categories and drop non-product rows
///
/// Three passes over the adapted records:
/// 1. Drop rows whose article code is a known non-inventory counterparty.
/// 2. Drop rows whose article code collides with a category-table key:
///    a category string in the key column marks a leaked header/footer row.
/// 3. Replace each category label with its canonical mapping when the
///    rename table knows it; unknown labels pass through unchanged.
///
/// Fails with `SchemaMismatch` when no canonical category remains after
/// mapping.
pub fn map_categories(
    records: Vec<NormalizedRecord>,
    category_table: &HashMap<&str, &str>,
    exclusion_keys: &HashSet<&str>,
) -> Result<Vec<NormalizedRecord>> {
    let input_count = records.len();

    let mapped: Vec<NormalizedRecord> = records
        .into_iter()
        .filter(|record| {
            let article: &str = &record.article_code;
            if exclusion_keys.contains(article) {
                debug!("Dropping counterparty row: {}", article);
                return false;
            }
            if category_table.contains_key(article) {
                debug!("Dropping leaked category row in key column: {}", article);
                return false;
            }
            true
        })
        .map(|mut record| {
            if let Some(canonical) = category_table.get(record.category.as_str()) {
                record.category = (*canonical).to_string();
            }
            record
        })
        .collect();

    debug!(
        "Category mapping kept {} of {} rows",
        mapped.len(),
        input_count
    );

    validate_categories(&mapped, category_table)?;
    Ok(mapped)
}

/// Sanity gate: at least one canonical category must be present
///
/// A mapped table with zero recognized categories signals that the upstream
/// operator exported the wrong 1C report variant; failing here beats
/// silently producing an all-discrepancy report.
fn validate_categories(
    records: &[NormalizedRecord],
    category_table: &HashMap<&str, &str>,
) -> Result<()> {
    let expected: HashSet<&str> = category_table.values().copied().collect();
    let actual: HashSet<&str> = records
        .iter()
        .map(|record| record.category.as_str())
        .filter(|category| !category.is_empty())
        .collect();

    if expected.is_disjoint(&actual) {
        warn!(
            "No expected category among {} distinct labels after mapping",
            actual.len()
        );
        return Err(Error::schema_mismatch(Source::Erp.name(), REPORT_VARIANT_HINT));
    }
    Ok(())
}
