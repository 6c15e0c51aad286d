//! Filtering job lists by salary range membership.

use tracing::debug;

use crate::matcher::{SalaryInput, SalaryRange, matches_salary_range};
use crate::record::{JobRecord, MAX_SALARY, MIN_SALARY};

/// Keep the jobs whose salary range contains `salary`, in input order.
///
/// Each record is reduced to its `min_salary`/`max_salary` view and checked
/// with [`matches_salary_range`]; the full record is returned on a match.
/// Records that fail validation are dropped without surfacing an error, and
/// an invalid `salary` drops every record.
pub fn filter_by_salary_range<'a, S>(jobs: &'a [JobRecord], salary: S) -> Vec<&'a JobRecord>
where
    S: SalaryInput,
{
    jobs.iter()
        .enumerate()
        .filter(|(index, job)| match matches_salary_range(&salary_view(job), &salary) {
            Ok(matched) => matched,
            Err(err) => {
                debug!(index, %err, "excluding job from salary filter");
                false
            }
        })
        .map(|(_, job)| job)
        .collect()
}

/// Iterator form of [`filter_by_salary_range`] for owned records.
///
/// The target salary is resolved once up front; if it is not an integer the
/// iterator yields nothing.
pub fn retain_salary_range<I, S>(jobs: I, salary: S) -> impl Iterator<Item = JobRecord>
where
    I: IntoIterator<Item = JobRecord>,
    S: SalaryInput,
{
    let target = salary.to_salary().ok();
    jobs.into_iter().filter(move |job| match target {
        Some(target) => SalaryRange::from_record(job).is_ok_and(|range| range.contains(target)),
        None => false,
    })
}

/// The two-field record the matcher needs.
fn salary_view(job: &JobRecord) -> JobRecord {
    [MIN_SALARY, MAX_SALARY]
        .into_iter()
        .filter_map(|field| job.get(field).map(|value| (field, value)))
        .collect()
}
