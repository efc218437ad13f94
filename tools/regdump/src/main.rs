//! regdump - Modbus register pair reporter
//!
//! Reads `register_pair,LSR,MSR` rows from a CSV export, decodes each pair
//! into the float32 it carries and prints the readings.

mod config;
mod logging;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use voltage_regcodec::{
    write_report, ByteOrder, CsvRowLoader, Float32Decoder, ReadingPipeline, ReportFormat,
};

use crate::config::{Overrides, RegdumpConfig};

#[derive(Parser, Debug)]
#[command(name = "regdump")]
#[command(about = "Decode float32 readings from Modbus register pairs")]
#[command(long_about = "Decode float32 readings from Modbus register pairs

Each CSV row holds a label and two signed 16-bit registers (LSR, MSR).
By default the LSR is the low word of the float (CDAB layout).

Examples:
  regdump                               # Decode ./modbus_reading.csv
  regdump meters.csv --byte-order ABCD  # MSR first
  regdump meters.csv --raw              # Show registers without decoding
  regdump meters.csv -f json            # JSON output")]
#[command(version)]
struct Cli {
    /// CSV file to read (default: modbus_reading.csv)
    input: Option<PathBuf>,

    /// Configuration file (yaml, toml or json)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Register layout: ABCD, DCBA, CDAB or BADC
    #[arg(short = 'b', long = "byte-order")]
    byte_order: Option<ByteOrder>,

    /// Report raw registers without decoding
    #[arg(long)]
    raw: bool,

    /// Treat the first row as data instead of a header
    #[arg(long)]
    no_headers: bool,

    /// CSV field delimiter
    #[arg(short = 'd', long)]
    delimiter: Option<char>,

    /// Output format: text, json or csv
    #[arg(short = 'f', long)]
    format: Option<ReportFormat>,

    /// Decimal places in text and CSV output
    #[arg(short = 'p', long)]
    precision: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            byte_order: self.byte_order,
            has_headers: self.no_headers.then_some(false),
            delimiter: self.delimiter,
            decode: self.raw.then_some(false),
            format: self.format,
            precision: self.precision,
            log_level: self.verbose.then(|| "debug".to_string()),
        }
    }
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_failure(&e, logging::is_initialized());
            ExitCode::FAILURE
        }
    }
}

/// Report a fatal error with its full context chain
fn log_failure(err: &anyhow::Error, logging_ready: bool) {
    if logging_ready {
        error!("{:#}", err);
    } else {
        eprintln!("Error: {:#}", err);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let config = RegdumpConfig::load(cli.config.as_deref(), &cli.overrides())?;
    logging::init(&config.log_level, cli.verbose)?;
    debug!("Effective configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)?;
    out.flush()?;

    Ok(())
}

fn run<W: Write>(config: &RegdumpConfig, out: &mut W) -> Result<()> {
    let loader = CsvRowLoader::from_path(&config.input, config.loader_options()?)
        .context("Error opening file")?;

    let mut pipeline = ReadingPipeline::new(loader);
    if config.decode {
        pipeline = pipeline.with_decoder(Arc::new(Float32Decoder::new(config.byte_order)));
    }

    let readings = pipeline
        .run()
        .with_context(|| format!("Error reading CSV {}", config.input.display()))?;

    write_report(out, &readings, config.report_options()).context("Error writing report")?;
    Ok(())
}
