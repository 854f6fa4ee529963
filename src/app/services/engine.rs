//! Reconciliation engine facade.
//!
//! The two operations orchestration calls. Both are pure transformations
//! over the uploaded bytes: no state survives a call, and every failure
//! mode is detected before any output is constructed, so the caller can
//! retry by resubmitting the relevant upload.

use tracing::info;

use crate::app::models::{NormalizedRecord, ReconcileOutcome};
use crate::app::services::category_mapper::map_categories;
use crate::app::services::reconciler::reconcile;
use crate::app::services::report::render_report;
use crate::app::services::source_adapter::{adapt_erp_table, adapt_wms_table};
use crate::app::services::table_codec::decode_table;
use crate::config::Config;
use crate::constants::{category_map, excluded_counterparties};
use crate::Result;

/// Process the first upload: the ERP export
///
/// Decodes, adapts, canonicalizes categories, and drops excluded rows.
/// The returned records are held by the session until the second upload
/// arrives.
pub fn process_first_upload(bytes: &[u8], config: &Config) -> Result<Vec<NormalizedRecord>> {
    let table = decode_table(bytes)?;
    let records = adapt_erp_table(&table, &config.erp)?;
    let records = map_categories(records, category_map(), excluded_counterparties())?;

    info!("ERP upload processed: {} records", records.len());
    Ok(records)
}

/// Process the second upload and reconcile against the first
///
/// Decodes and adapts the WMS export, joins it against the stored ERP
/// records, and renders the discrepancy report. An empty result set is a
/// successful outcome, reported as [`ReconcileOutcome::NoDiscrepancies`].
pub fn process_second_upload_and_reconcile(
    erp_records: Vec<NormalizedRecord>,
    bytes: &[u8],
    config: &Config,
) -> Result<ReconcileOutcome> {
    let table = decode_table(bytes)?;
    let wms_records = adapt_wms_table(&table, &config.wms)?;

    let discrepancies = reconcile(erp_records, wms_records);
    if discrepancies.is_empty() {
        info!("Reconciliation complete: no discrepancies");
        return Ok(ReconcileOutcome::NoDiscrepancies);
    }

    let rows = discrepancies.len();
    let bytes = render_report(&discrepancies)?;
    info!("Reconciliation complete: {} discrepancy rows", rows);

    Ok(ReconcileOutcome::Report { bytes, rows })
}
