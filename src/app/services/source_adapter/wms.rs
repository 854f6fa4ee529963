//! WMS (СОЛВО) export adapter.

use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::app::models::{NormalizedRecord, RawTable, Source};
use crate::app::services::normalizer::{coerce_quantity, key_string};
use crate::config::FramingConfig;
use crate::constants::WMS_COLUMN_ORDER;
use crate::{Error, Result};

/// Adapt a raw WMS export to the common intermediate schema
///
/// The СОЛВО report carries two junk rows at the top and a totals/signature
/// block at the bottom; its real column meaning is positional. After
/// framing, duplicate keys are aggregated: the WMS reports the same product
/// once per physical location, which must collapse to one logical quantity
/// before matching.
pub fn adapt_wms_table(table: &RawTable, framing: &FramingConfig) -> Result<Vec<NormalizedRecord>> {
    info!(
        "Adapting WMS table: {} columns, {} rows",
        table.column_count(),
        table.row_count()
    );

    if table.column_count() < WMS_COLUMN_ORDER.len() {
        return Err(Error::schema_mismatch(
            Source::Wms.name(),
            format!(
                "export has {} columns, expected at least {}",
                table.column_count(),
                WMS_COLUMN_ORDER.len()
            ),
        ));
    }

    let framed_end = table.row_count().saturating_sub(framing.trailing_rows);
    if framing.leading_rows >= framed_end {
        warn!(
            "WMS table has no data rows after framing ({} total)",
            table.row_count()
        );
        return Ok(Vec::new());
    }

    // Positional schema: ProductCode, ArticleCode, Name, Category, Quantity
    let mut groups: BTreeMap<(String, String, String, String), i64> = BTreeMap::new();
    for row in framing.leading_rows..framed_end {
        let product_code = key_string(table.cell(row, 0));
        let article_code = key_string(table.cell(row, 1));
        let name = key_string(table.cell(row, 2));
        let category = key_string(table.cell(row, 3));
        let quantity = coerce_quantity(table.cell(row, 4));

        if product_code.is_empty() && article_code.is_empty() {
            continue;
        }

        *groups
            .entry((product_code, category, article_code, name))
            .or_insert(0) += quantity;
    }

    let records: Vec<NormalizedRecord> = groups
        .into_iter()
        .map(
            |((product_code, category, article_code, name), quantity)| NormalizedRecord {
                product_code,
                article_code,
                name,
                category,
                quantity,
            },
        )
        .collect();

    debug!("WMS adapter produced {} aggregated records", records.len());
    Ok(records)
}
