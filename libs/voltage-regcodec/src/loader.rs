//! Row loaders for register pair tables
//!
//! A loader turns a tabular source into `RegisterPair` rows. The expected
//! layout is three columns: label, LSR, MSR. Loading fails fast on the first
//! bad row and never returns partial results.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::{RegCodecError, Result};
use crate::reading::RegisterPair;

/// Number of fields in a register pair row
pub const FIELD_COUNT: usize = 3;

/// Source of register pair rows
pub trait RowLoader {
    /// Load every row in source order
    fn load(&mut self) -> Result<Vec<RegisterPair>>;

    /// Human readable source description for logs
    fn describe(&self) -> String;
}

/// Parse one row of fields into a `RegisterPair`
///
/// `row` is the 1-based data row number used in error messages.
pub fn parse_row<S: AsRef<str>>(row: usize, fields: &[S]) -> Result<RegisterPair> {
    if fields.len() != FIELD_COUNT {
        return Err(RegCodecError::MalformedRow {
            row,
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let label = fields[0].as_ref();
    let low = parse_register(row, "LSR", fields[1].as_ref())?;
    let high = parse_register(row, "MSR", fields[2].as_ref())?;

    Ok(RegisterPair::new(label, low, high))
}

fn parse_register(row: usize, field: &'static str, value: &str) -> Result<i16> {
    let value = value.trim();
    value
        .parse::<i16>()
        .map_err(|e| RegCodecError::invalid_field(row, field, value, e))
}

/// CSV loader options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvLoaderOptions {
    /// Skip the first record as a header
    pub has_headers: bool,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for CsvLoaderOptions {
    fn default() -> Self {
        Self {
            has_headers: true,
            delimiter: b',',
        }
    }
}

/// Loads register pairs from CSV
pub struct CsvRowLoader<R> {
    reader: csv::Reader<R>,
    source: String,
}

impl CsvRowLoader<File> {
    /// Open a CSV file
    pub fn from_path<P: AsRef<Path>>(path: P, options: CsvLoaderOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| RegCodecError::source_unavailable(PathBuf::from(path), e))?;

        debug!("Opened register table {}", path.display());
        Ok(Self::with_source(file, options, path.display().to_string()))
    }
}

impl<R: Read> CsvRowLoader<R> {
    /// Read CSV from any reader (in-memory buffers, stdin, ...)
    pub fn from_reader(reader: R, options: CsvLoaderOptions) -> Self {
        Self::with_source(reader, options, "<reader>".to_string())
    }

    fn with_source(reader: R, options: CsvLoaderOptions, source: String) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(options.has_headers)
            .delimiter(options.delimiter)
            // Field count is checked per row so the error carries the row number
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        Self { reader, source }
    }
}

impl<R: Read> RowLoader for CsvRowLoader<R> {
    fn load(&mut self) -> Result<Vec<RegisterPair>> {
        let mut pairs = Vec::new();
        let mut record = StringRecord::new();
        let mut row = 0;

        loop {
            row += 1;
            let more = self
                .reader
                .read_record(&mut record)
                .map_err(|source| RegCodecError::Csv { row, source })?;
            if !more {
                break;
            }

            let fields: Vec<&str> = record.iter().collect();
            let pair = parse_row(row, &fields).inspect_err(|e| {
                warn!("Rejecting {} at row {}: {}", self.source, row, e);
            })?;
            pairs.push(pair);
        }

        debug!("Loaded {} register pairs from {}", pairs.len(), self.source);
        Ok(pairs)
    }

    fn describe(&self) -> String {
        self.source.clone()
    }
}

/// In-memory rows, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryRowLoader {
    rows: Vec<RegisterPair>,
}

impl MemoryRowLoader {
    pub fn new(rows: Vec<RegisterPair>) -> Self {
        Self { rows }
    }

    /// Build from unparsed string fields, applying the same checks as CSV
    pub fn from_fields<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, fields)| parse_row(i + 1, fields))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }
}

impl RowLoader for MemoryRowLoader {
    fn load(&mut self) -> Result<Vec<RegisterPair>> {
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        format!("<memory: {} rows>", self.rows.len())
    }
}
