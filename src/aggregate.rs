//! Minimum and maximum salary aggregation.
//!
//! Aggregators only look at the one field they reduce. A record whose
//! `max_salary` is not a numeric string is skipped by the max aggregator
//! but can still contribute its `min_salary` to the min aggregator.

use tracing::{debug, info};

use crate::error::{InsightsError, Result};
use crate::reader::JobReader;
use crate::record::{JobRecord, MAX_SALARY, MIN_SALARY, parse_salary};

/// Both salary extremes computed from one pass over the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryStats {
    /// Smallest numeric `min_salary`.
    pub min: u64,
    /// Largest numeric `max_salary`.
    pub max: u64,
    /// Number of records examined.
    pub considered: usize,
}

fn numeric_values<'a>(
    jobs: &'a [JobRecord],
    field: &'static str,
) -> impl Iterator<Item = u64> + 'a {
    jobs.iter().filter_map(move |job| {
        let value = job.get(field).and_then(parse_salary);
        if value.is_none() {
            debug!(field, raw = ?job.get(field), "skipping non-numeric salary");
        }
        value
    })
}

/// Largest numeric `max_salary` among `jobs`.
pub fn max_salary(jobs: &[JobRecord]) -> Result<u64> {
    numeric_values(jobs, MAX_SALARY)
        .max()
        .ok_or(InsightsError::EmptyAggregation { field: MAX_SALARY })
}

/// Smallest numeric `min_salary` among `jobs`.
pub fn min_salary(jobs: &[JobRecord]) -> Result<u64> {
    numeric_values(jobs, MIN_SALARY)
        .min()
        .ok_or(InsightsError::EmptyAggregation { field: MIN_SALARY })
}

/// Both extremes at once. Fails if either field has no numeric value.
pub fn salary_stats(jobs: &[JobRecord]) -> Result<SalaryStats> {
    Ok(SalaryStats {
        min: min_salary(jobs)?,
        max: max_salary(jobs)?,
        considered: jobs.len(),
    })
}

fn read_all<R: JobReader + ?Sized>(reader: &R, source: &str) -> Result<Vec<JobRecord>> {
    let jobs = reader.read(source)?;
    info!(source, records = jobs.len(), "read job records");
    Ok(jobs)
}

/// Read `source` through `reader` and return the largest numeric `max_salary`.
pub fn get_max_salary<R: JobReader + ?Sized>(reader: &R, source: &str) -> Result<u64> {
    max_salary(&read_all(reader, source)?)
}

/// Read `source` through `reader` and return the smallest numeric `min_salary`.
pub fn get_min_salary<R: JobReader + ?Sized>(reader: &R, source: &str) -> Result<u64> {
    min_salary(&read_all(reader, source)?)
}

/// Read `source` once and compute both extremes.
pub fn get_salary_stats<R: JobReader + ?Sized>(reader: &R, source: &str) -> Result<SalaryStats> {
    salary_stats(&read_all(reader, source)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn job(min: Option<&str>, max: Option<&str>) -> JobRecord {
        let mut j = JobRecord::new();
        if let Some(min) = min {
            j.insert(MIN_SALARY, min);
        }
        if let Some(max) = max {
            j.insert(MAX_SALARY, max);
        }
        j
    }

    fn sample() -> Vec<JobRecord> {
        vec![
            job(Some("50000"), Some("90000")),
            job(Some("100000"), Some("80000")),
            job(Some("abc"), Some("90000")),
        ]
    }

    #[test]
    fn test_max_salary_sample() {
        assert_eq!(max_salary(&sample()).unwrap(), 90000);
    }

    #[test]
    fn test_min_salary_sample() {
        assert_eq!(min_salary(&sample()).unwrap(), 50000);
    }

    #[test]
    fn test_non_numeric_values_are_ignored() {
        let jobs = vec![
            job(Some("-999999"), Some("9999999.5")),
            job(Some("30000"), Some("")),
            job(None, None),
            job(Some("40000"), Some("60000")),
        ];
        assert_eq!(max_salary(&jobs).unwrap(), 60000);
        assert_eq!(min_salary(&jobs).unwrap(), 30000);
    }

    #[test]
    fn test_fields_are_checked_independently() {
        let jobs = vec![job(Some("10"), Some("bad")), job(Some("bad"), Some("20"))];
        assert_eq!(min_salary(&jobs).unwrap(), 10);
        assert_eq!(max_salary(&jobs).unwrap(), 20);
    }

    #[test]
    fn test_inverted_ranges_still_count() {
        let jobs = vec![job(Some("100000"), Some("80000"))];
        assert_eq!(min_salary(&jobs).unwrap(), 100000);
        assert_eq!(max_salary(&jobs).unwrap(), 80000);
    }

    #[test]
    fn test_empty_list_fails() {
        assert!(matches!(
            max_salary(&[]),
            Err(InsightsError::EmptyAggregation { field: "max_salary" })
        ));
        assert!(matches!(
            min_salary(&[]),
            Err(InsightsError::EmptyAggregation { field: "min_salary" })
        ));
    }

    #[test]
    fn test_no_numeric_values_fails() {
        let jobs = vec![job(Some("x"), Some("y")), job(None, Some(""))];
        assert!(max_salary(&jobs).is_err());
        assert!(min_salary(&jobs).is_err());
    }

    #[test]
    fn test_duplicates_do_not_matter() {
        let jobs = vec![job(Some("5"), Some("7")), job(Some("5"), Some("7"))];
        assert_eq!(min_salary(&jobs).unwrap(), 5);
        assert_eq!(max_salary(&jobs).unwrap(), 7);
    }

    #[test]
    fn test_salary_stats() {
        let stats = salary_stats(&sample()).unwrap();
        assert_eq!(
            stats,
            SalaryStats {
                min: 50000,
                max: 90000,
                considered: 3
            }
        );
    }

    #[test]
    fn test_salary_stats_requires_both_fields() {
        let jobs = vec![job(Some("10"), None)];
        assert!(matches!(
            salary_stats(&jobs),
            Err(InsightsError::EmptyAggregation { field: "max_salary" })
        ));
    }

    #[test]
    fn test_get_max_salary_passes_source_to_reader() {
        let seen = Cell::new(false);
        let reader = |source: &str| -> Result<Vec<JobRecord>> {
            assert_eq!(source, "jobs.csv");
            seen.set(true);
            Ok(sample())
        };
        assert_eq!(get_max_salary(&reader, "jobs.csv").unwrap(), 90000);
        assert!(seen.get());
    }

    #[test]
    fn test_get_min_salary_uses_reader() {
        let reader = |_: &str| -> Result<Vec<JobRecord>> { Ok(sample()) };
        assert_eq!(get_min_salary(&reader, "any").unwrap(), 50000);
        assert_eq!(get_salary_stats(&reader, "any").unwrap().max, 90000);
    }

    #[test]
    fn test_reader_errors_propagate() {
        let reader = |_: &str| -> Result<Vec<JobRecord>> {
            Err(InsightsError::Parse {
                line: 3,
                message: "unterminated quote".to_string(),
            })
        };
        assert!(matches!(
            get_max_salary(&reader, "broken.csv"),
            Err(InsightsError::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn test_empty_source_fails_through_reader() {
        let reader = |_: &str| -> Result<Vec<JobRecord>> { Ok(Vec::new()) };
        assert!(matches!(
            get_min_salary(&reader, "empty.csv"),
            Err(InsightsError::EmptyAggregation { .. })
        ));
    }
}
