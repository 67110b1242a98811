//! Command implementations for the scrub CLI.

use std::io::{self, Write};

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

use scrub_core::obfuscate;
use scrub_model::{FileFormat, ObfuscationRequest};
use scrub_store::S3Storage;

use crate::cli::MaskArgs;

/// Fetch, mask, and emit one file.
///
/// The masked bytes go to `--output` when given, otherwise raw to stdout
/// so the command can be piped.
pub fn run_mask(args: &MaskArgs) -> Result<()> {
    let request = ObfuscationRequest::new(args.location.clone(), args.pii_fields.clone());
    let storage = S3Storage::new().context("initialize storage")?;
    let output = obfuscate(&request, &storage)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("write output: {}", path.display()))?;
            info!(bytes = output.len(), path = %path.display(), "wrote masked file");
            println!("Wrote {} bytes to {}", output.len(), path.display());
        }
        None => {
            io::stdout()
                .write_all(&output)
                .context("write output to stdout")?;
        }
    }
    Ok(())
}

/// Print the supported formats table.
pub fn run_formats() {
    println!("{}", formats_table());
}

pub fn formats_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Format", "Suffix", "Representation"]);
    apply_table_style(&mut table);
    for format in FileFormat::ALL {
        table.add_row(vec![format.as_str(), format.suffix(), representation(format)]);
    }
    table
}

fn representation(format: FileFormat) -> &'static str {
    match format {
        FileFormat::Csv => "delimited text with a header row",
        FileFormat::Json => "array of JSON objects",
        FileFormat::Parquet => "columnar binary table",
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}
