//! Columnar (Parquet) codec.

use std::io::Cursor;

use polars::prelude::{DataFrame, NamedFrom, ParquetReader, ParquetWriter, SerReader, Series};

use scrub_model::{FileFormat, MASKED_VALUE, Result, ScrubError};

/// Parse parquet bytes into a table of named, typed columns.
pub fn decode(bytes: &[u8]) -> Result<DataFrame> {
    ParquetReader::new(Cursor::new(bytes))
        .finish()
        .map_err(|error| ScrubError::malformed_input(FileFormat::Parquet, error.to_string()))
}

/// Replace each named column wholesale with a string column of the mask
/// token.
///
/// Matching columns are rebuilt rather than mutated cell by cell, so a
/// numeric or boolean column comes back string-typed in the output. Field
/// names with no matching column are a no-op.
pub fn mask(frame: &mut DataFrame, fields: &[String]) -> Result<()> {
    let height = frame.height();
    for field in fields {
        if frame.column(field).is_err() {
            continue;
        }
        let masked = Series::new(field.as_str().into(), vec![MASKED_VALUE; height]);
        frame
            .with_column(masked)
            .map_err(|error| ScrubError::encode_failure(FileFormat::Parquet, error.to_string()))?;
    }
    Ok(())
}

/// Serialize the table back to parquet bytes.
///
/// Polars emits no synthetic row index column, so the output schema is
/// exactly the (possibly widened) input schema.
pub fn encode(frame: &mut DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    ParquetWriter::new(&mut buffer)
        .finish(frame)
        .map_err(|error| ScrubError::encode_failure(FileFormat::Parquet, error.to_string()))?;
    Ok(buffer)
}
