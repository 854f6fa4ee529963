//! Table encoding for delivery to the caller.

use tracing::debug;

use crate::app::models::{Cell, RawTable};
use crate::{Error, Result};

/// Encode a table to bytes in the delivery format
pub fn encode_table(table: &RawTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(table.columns())
        .map_err(|e| Error::csv("failed to write report header", Some(e)))?;

    for row in table.rows() {
        let fields: Vec<String> = row.iter().map(cell_to_field).collect();
        writer
            .write_record(&fields)
            .map_err(|e| Error::csv("failed to write report row", Some(e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::csv(format!("failed to flush report: {}", e), None))?;

    debug!("Encoded table: {} bytes", bytes.len());
    Ok(bytes)
}

/// Render a cell as an output field
///
/// Integral numbers render without a decimal point so quantities come out
/// as "10", not "10.0".
fn cell_to_field(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
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
