//! Reading job records from delimited text.
//!
//! The aggregators depend only on the [`JobReader`] trait. [`CsvReader`]
//! is the stock implementation: the first line names the columns and every
//! following non-empty line becomes one [`JobRecord`].
//!
//! ```text
//! job_title,company,min_salary,max_salary
//! Analyst,"Acme, Inc.",50000,90000
//! ```

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{InsightsError, Result};
use crate::record::JobRecord;

/// Produces job records for a source identifier (usually a file path).
pub trait JobReader {
    fn read(&self, source: &str) -> Result<Vec<JobRecord>>;
}

impl<F> JobReader for F
where
    F: Fn(&str) -> Result<Vec<JobRecord>>,
{
    fn read(&self, source: &str) -> Result<Vec<JobRecord>> {
        self(source)
    }
}

/// Options for [`CsvReader`].
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: b',')
    pub delimiter: u8,
    /// Strip surrounding whitespace from every field and header (default: false)
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
        }
    }
}

/// Header-keyed CSV reader.
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    options: CsvOptions,
}

impl CsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CsvOptions) -> Self {
        Self { options }
    }

    /// Read a file and return its header alongside the records.
    ///
    /// The header is needed to write records back out in column order.
    pub fn read_table(&self, path: impl AsRef<Path>) -> Result<(Vec<String>, Vec<JobRecord>)> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| InsightsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = parse_table(&text, &self.options)?;
        debug!(path = %path.display(), columns = table.0.len(), records = table.1.len(), "parsed csv");
        Ok(table)
    }
}

impl JobReader for CsvReader {
    fn read(&self, source: &str) -> Result<Vec<JobRecord>> {
        self.read_table(source).map(|(_, jobs)| jobs)
    }
}

/// Parse delimited text into job records.
pub fn parse_jobs(text: &str, options: &CsvOptions) -> Result<Vec<JobRecord>> {
    parse_table(text, options).map(|(_, jobs)| jobs)
}

/// Parse delimited text into its header and job records.
///
/// Blank lines are skipped. Rows shorter than the header leave the trailing
/// columns absent; extra cells are dropped.
pub fn parse_table(text: &str, options: &CsvOptions) -> Result<(Vec<String>, Vec<JobRecord>)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(if options.trim { Trim::All } else { Trim::None })
        .flexible(true)
        .from_reader(text.as_bytes());

    let header: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut jobs: Vec<JobRecord> = Vec::new();
    for row in reader.records() {
        let row = row.map_err(parse_error)?;
        if row.len() > header.len() {
            let line = row.position().map(|p| p.line());
            debug!(?line, extra = row.len() - header.len(), "dropping extra cells");
        }
        jobs.push(header.iter().map(String::as_str).zip(row.iter()).collect());
    }

    Ok((header, jobs))
}

fn parse_error(err: csv::Error) -> InsightsError {
    let line = err.position().map_or(0, |p| p.line() as usize);
    InsightsError::Parse {
        line,
        message: err.to_string(),
    }
}
