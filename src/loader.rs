use crate::types::RawRow;
use csv::ReaderBuilder;
use std::error::Error;
use std::path::Path;

/// Raw CSV contents plus the header facts the rest of the pipeline needs.
#[derive(Debug)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
    /// Whether the `Payment Method` column exists in the header row. This
    /// is a header-level fact: a present-but-empty column still counts.
    pub has_payment_method: bool,
    /// Rows the csv reader could not deserialize at all.
    pub deserialize_errors: usize,
}

/// Read the order-history CSV into memory.
///
/// A missing or unreadable file is fatal and propagated to the caller;
/// individual malformed rows are skipped and counted instead.
pub fn load(path: &Path) -> Result<RawTable, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
    let has_payment_method = rdr
        .headers()?
        .iter()
        .any(|h| h.trim() == "Payment Method");

    let mut rows: Vec<RawRow> = Vec::new();
    let mut deserialize_errors = 0usize;
    for result in rdr.deserialize::<RawRow>() {
        match result {
            Ok(row) => rows.push(row),
            Err(_) => deserialize_errors += 1,
        }
    }

    Ok(RawTable {
        rows,
        has_payment_method,
        deserialize_errors,
    })
}
