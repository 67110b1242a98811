//! CLI argument definitions for the scrub tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "scrub",
    version,
    about = "Mask PII fields in S3-hosted CSV, JSON, and Parquet files",
    long_about = "Fetch a data file from S3, replace the values of the named PII fields\n\
                  with '***' in every record, and emit the file re-serialized in its\n\
                  original format."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch a file, mask the named fields, and emit the result.
    Mask(MaskArgs),

    /// List the supported file formats.
    Formats,
}

#[derive(Parser)]
pub struct MaskArgs {
    /// S3 location of the file to obfuscate (s3://bucket/key).
    #[arg(value_name = "S3_URI")]
    pub location: String,

    /// Field name to mask (repeatable; comma-separated lists accepted).
    #[arg(
        long = "pii-field",
        short = 'p',
        value_name = "NAME",
        value_delimiter = ',',
        required = true
    )]
    pub pii_fields: Vec<String>,

    /// Write the masked bytes to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_args_parse() {
        let cli = Cli::try_parse_from([
            "scrub",
            "mask",
            "s3://test-bucket/sample.csv",
            "--pii-field",
            "name",
            "--pii-field",
            "email_address",
        ])
        .unwrap();
        let Command::Mask(args) = cli.command else {
            panic!("expected mask command");
        };
        assert_eq!(args.location, "s3://test-bucket/sample.csv");
        assert_eq!(args.pii_fields, vec!["name", "email_address"]);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_comma_separated_fields() {
        let cli = Cli::try_parse_from([
            "scrub",
            "mask",
            "s3://b/k.json",
            "-p",
            "name,email",
            "-o",
            "out.json",
        ])
        .unwrap();
        let Command::Mask(args) = cli.command else {
            panic!("expected mask command");
        };
        assert_eq!(args.pii_fields, vec!["name", "email"]);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_fields_are_required() {
        assert!(Cli::try_parse_from(["scrub", "mask", "s3://b/k.csv"]).is_err());
    }
}
