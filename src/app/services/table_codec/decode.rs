//! Table decoding from uploaded bytes.

use tracing::debug;

use crate::app::models::{Cell, RawTable};
use crate::{Error, Result};

/// Decode uploaded bytes into a raw table
///
/// The first row supplies column labels; unlabeled columns receive
/// positional `Unnamed: {index}` placeholders, which is how the ERP export
/// presents its mostly-empty header row. Ragged data rows are padded with
/// empty cells on access.
///
/// Fields keep their lexical form: codes like "007" decode as text, never as
/// numbers, so join keys survive unchanged.
///
/// Fails with a format error when the content cannot be parsed or contains
/// no data rows.
pub fn decode_table(bytes: &[u8]) -> Result<RawTable> {
    if bytes.is_empty() {
        return Err(Error::format("uploaded file is empty"));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut records = reader.records();

    let header = match records.next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => {
            return Err(Error::format(format!(
                "uploaded file is not a valid table: {}",
                e
            )));
        }
        None => return Err(Error::format("uploaded file is empty")),
    };

    let columns: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(index, label)| {
            if label.trim().is_empty() {
                format!("Unnamed: {}", index)
            } else {
                label.trim().to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for result in records {
        let record = result.map_err(|e| {
            Error::format(format!("uploaded file is not a valid table: {}", e))
        })?;
        rows.push(record.iter().map(Cell::from_field).collect());
    }

    if rows.is_empty() {
        return Err(Error::format("uploaded table has no data rows"));
    }

    debug!(
        "Decoded table: {} columns, {} data rows",
        columns.len(),
        rows.len()
    );

    Ok(RawTable::new(columns, rows))
}
