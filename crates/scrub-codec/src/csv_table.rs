//! Delimited-text codec.

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use scrub_model::{FileFormat, MASKED_VALUE, Result, ScrubError};

/// Decoded tabular content: a header plus rows aligned to it.
///
/// Every cell is a string; no type inference is performed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parse delimited text with a header row.
///
/// The first row supplies the field names; every later row becomes a
/// record. Short rows pad with empty cells and long rows truncate, so each
/// record lines up with the header.
pub fn decode(bytes: &[u8]) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(bytes);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| ScrubError::malformed_input(FileFormat::Csv, error.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|error| ScrubError::malformed_input(FileFormat::Csv, error.to_string()))?;
        let row: Vec<String> = (0..headers.len())
            .map(|idx| record.get(idx).unwrap_or("").to_string())
            .collect();
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}

/// Overwrite every cell of each named column with the mask token.
///
/// Columns not named in `fields` are untouched; field names with no
/// matching header are a no-op.
pub fn mask(table: &mut CsvTable, fields: &[String]) {
    for (idx, header) in table.headers.iter().enumerate() {
        if !fields.iter().any(|field| field == header) {
            continue;
        }
        for row in &mut table.rows {
            if let Some(cell) = row.get_mut(idx) {
                *cell = MASKED_VALUE.to_string();
            }
        }
    }
}

/// Re-emit the header row followed by all rows.
///
/// Records are terminated with a bare `\n` so identical input always
/// produces identical bytes.
pub fn encode(table: &CsvTable) -> Result<Vec<u8>> {
    if table.headers.is_empty() && table.rows.is_empty() {
        return Ok(Vec::new());
    }
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer
        .write_record(&table.headers)
        .map_err(|error| ScrubError::encode_failure(FileFormat::Csv, error.to_string()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|error| ScrubError::encode_failure(FileFormat::Csv, error.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|error| ScrubError::encode_failure(FileFormat::Csv, error.to_string()))
}
