//! Outer-join reconciliation of the two normalized tables.
//!
//! The join is built as an explicit key → (left?, right?) map rather than a
//! merge primitive, so the absence-sentinel handling stays visible and
//! independently testable. Keys are the composite (ProductCode, ArticleCode,
//! Category) tuple; every key present on either side appears exactly once in
//! the joined result.

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::app::models::{DiscrepancyRecord, NormalizedRecord, QuantitySide, RecordKey};

#[cfg(test)]
pub mod tests;

/// One joined key with the contribution of each side, if any
///
/// The join guarantees at least one side is present for every slot.
#[derive(Debug, Default, Clone)]
struct JoinSlot {
    erp: Option<NormalizedRecord>,
    wms: Option<NormalizedRecord>,
}

/// Reconcile the two sides into a list of discrepancy records
///
/// A key is reported iff its sides differ: either the signed quantity delta
/// is non-zero, or exactly one side contributed the key at all. An existence
/// mismatch counts even when the present side's quantity is zero. Agreement
/// rows (both present, delta zero) never appear in the output.
///
/// Output is ordered by the composite key.
pub fn reconcile(
    erp_records: Vec<NormalizedRecord>,
    wms_records: Vec<NormalizedRecord>,
) -> Vec<DiscrepancyRecord> {
    info!(
        "Reconciling {} ERP records against {} WMS records",
        erp_records.len(),
        wms_records.len()
    );

    let mut slots: BTreeMap<RecordKey, JoinSlot> = BTreeMap::new();

    for record in erp_records {
        let slot = slots.entry(record.key()).or_default();
        match &mut slot.erp {
            // The ERP side can repeat a key across report sections; quantities
            // for the same logical product accumulate, like the WMS side does
            // across locations.
            Some(existing) => {
                existing.quantity += record.quantity;
                if existing.name.is_empty() {
                    existing.name = record.name;
                }
            }
            None => slot.erp = Some(record),
        }
    }

    for record in wms_records {
        let slot = slots.entry(record.key()).or_default();
        match &mut slot.wms {
            Some(existing) => {
                existing.quantity += record.quantity;
                if existing.name.is_empty() {
                    existing.name = record.name;
                }
            }
            None => slot.wms = Some(record),
        }
    }

    let joined = slots.len();
    let discrepancies: Vec<DiscrepancyRecord> = slots
        .into_iter()
        .filter_map(|(key, slot)| diff_slot(key, slot))
        .collect();

    debug!(
        "Join produced {} keys, {} with discrepancies",
        joined,
        discrepancies.len()
    );
    discrepancies
}

/// Compute the discrepancy for one joined key, if the sides differ
fn diff_slot(key: RecordKey, slot: JoinSlot) -> Option<DiscrepancyRecord> {
    let erp_quantity = slot
        .erp
        .as_ref()
        .map(|r| QuantitySide::Value(r.quantity))
        .unwrap_or(QuantitySide::NoData);
    let wms_quantity = slot
        .wms
        .as_ref()
        .map(|r| QuantitySide::Value(r.quantity))
        .unwrap_or(QuantitySide::NoData);

    let delta = erp_quantity.numeric() - wms_quantity.numeric();
    let one_side_absent = erp_quantity.is_present() != wms_quantity.is_present();
    if delta == 0 && !one_side_absent {
        return None;
    }

    // Never leave the name blank when either side has it
    let name = match (&slot.erp, &slot.wms) {
        (Some(erp), _) if !erp.name.is_empty() => erp.name.clone(),
        (_, Some(wms)) if !wms.name.is_empty() => wms.name.clone(),
        (Some(erp), _) => erp.name.clone(),
        (_, Some(wms)) => wms.name.clone(),
        // The join never creates a slot with both sides absent
        (None, None) => String::new(),
    };

    Some(DiscrepancyRecord {
        product_code: key.product_code,
        article_code: key.article_code,
        name,
        category: key.category,
        erp_quantity,
        wms_quantity,
        delta,
    })
}
