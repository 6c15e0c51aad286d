//! Error types for salary aggregation, range matching and record reading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the aggregators and the record reader.
#[derive(Debug, Error)]
pub enum InsightsError {
    /// No record carried a numeric value for the aggregated field.
    #[error("no record has a numeric `{field}`")]
    EmptyAggregation { field: &'static str },

    /// A record or target salary failed range validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited input. `line` is 1-based, 0 when unknown.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = InsightsError> = std::result::Result<T, E>;

/// Which check a salary range validation tripped.
///
/// Every kind is reported through the same [`ValidationError`]; callers that
/// only care whether a record matches should not branch on this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationKind {
    MissingField(&'static str),
    NotAnInteger { field: &'static str, value: String },
    InvertedRange { min: u64, max: u64 },
    InvalidSalary(String),
}

/// A job record or target salary that cannot take part in range matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid salary range: {}", describe(.kind))]
pub struct ValidationError {
    kind: ValidationKind,
}

impl ValidationError {
    pub fn new(kind: ValidationKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &ValidationKind {
        &self.kind
    }
}

impl From<ValidationKind> for ValidationError {
    fn from(kind: ValidationKind) -> Self {
        Self::new(kind)
    }
}

fn describe(kind: &ValidationKind) -> String {
    match kind {
        ValidationKind::MissingField(field) => format!("missing `{field}`"),
        ValidationKind::NotAnInteger { field, value } => {
            format!("`{field}` is not an integer: {value:?}")
        }
        ValidationKind::InvertedRange { min, max } => {
            format!("min_salary {min} is greater than max_salary {max}")
        }
        ValidationKind::InvalidSalary(value) => format!("salary is not an integer: {value:?}"),
    }
}
