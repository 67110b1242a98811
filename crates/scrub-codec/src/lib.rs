//! Format codecs and the field-masking stage.
//!
//! Each codec module pairs `decode`/`encode` for one on-disk format with a
//! `mask` operation over its in-memory representation. Decode builds a
//! fresh representation per call, mask mutates it in place, and encode
//! serializes it back to bytes.

pub mod csv_table;
pub mod json_records;
pub mod parquet_table;

pub use csv_table::CsvTable;
pub use json_records::JsonRecords;

use scrub_model::{FileFormat, Result};
use tracing::debug;

/// Decode, mask, and re-encode one payload in the given format.
///
/// The stages run strictly in order; a failure in any of them aborts the
/// whole operation and no partial output is produced.
pub fn obfuscate_bytes(format: FileFormat, bytes: &[u8], fields: &[String]) -> Result<Vec<u8>> {
    match format {
        FileFormat::Csv => {
            let mut table = csv_table::decode(bytes)?;
            debug!(rows = table.rows.len(), "decoded tabular records");
            csv_table::mask(&mut table, fields);
            csv_table::encode(&table)
        }
        FileFormat::Json => {
            let mut records = json_records::decode(bytes)?;
            debug!(records = records.len(), "decoded record array");
            json_records::mask(&mut records, fields);
            json_records::encode(&records)
        }
        FileFormat::Parquet => {
            let mut frame = parquet_table::decode(bytes)?;
            debug!(rows = frame.height(), "decoded columnar table");
            parquet_table::mask(&mut frame, fields)?;
            parquet_table::encode(&mut frame)
        }
    }
}
