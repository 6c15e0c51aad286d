//! # salary-insights
//!
//! Salary statistics and salary-range filtering over job posting records.
//!
//! Job postings arrive as untyped tabular rows, so salary columns are plain
//! strings that may be missing, empty, or garbage. This crate answers three
//! questions about such data:
//! - **Highest salary**: the largest numeric `max_salary` across all jobs
//! - **Lowest salary**: the smallest numeric `min_salary` across all jobs
//! - **Range match**: which jobs pay a given salary within their range
//!
//! ## Example
//!
//! ```
//! use salary_insights::{JobRecord, filter_by_salary_range, max_salary};
//!
//! let jobs = vec![
//!     JobRecord::from_pairs([("min_salary", "50000"), ("max_salary", "90000")]),
//!     JobRecord::from_pairs([("min_salary", "100000"), ("max_salary", "80000")]),
//!     JobRecord::from_pairs([("min_salary", "abc"), ("max_salary", "90000")]),
//! ];
//!
//! let matched = filter_by_salary_range(&jobs, 60000);
//! assert_eq!(matched, vec![&jobs[0]]);
//! assert_eq!(max_salary(&jobs).unwrap(), 90000);
//! ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod reader;
pub mod record;
pub mod writer;

pub use aggregate::{
    SalaryStats, get_max_salary, get_min_salary, get_salary_stats, max_salary, min_salary,
    salary_stats,
};
pub use error::{InsightsError, Result, ValidationError, ValidationKind};
pub use filter::{filter_by_salary_range, retain_salary_range};
pub use matcher::{SalaryInput, SalaryRange, matches_salary_range};
pub use reader::{CsvOptions, CsvReader, JobReader, parse_jobs, parse_table};
pub use record::{JobRecord, MAX_SALARY, MIN_SALARY, parse_salary};
pub use writer::write_jobs;
