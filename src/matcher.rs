//! Salary range matching for a single job record.

use crate::error::{ValidationError, ValidationKind};
use crate::record::{JobRecord, MAX_SALARY, MIN_SALARY, parse_salary};

/// A validated closed salary interval `[min, max]` with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    min: u64,
    max: u64,
}

impl SalaryRange {
    /// Build a range from explicit bounds, rejecting inverted ones.
    pub fn new(min: u64, max: u64) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationKind::InvertedRange { min, max }.into());
        }
        Ok(Self { min, max })
    }

    /// Extract the two-field view of a record.
    pub fn from_record(job: &JobRecord) -> Result<Self, ValidationError> {
        let min = salary_field(job, MIN_SALARY)?;
        let max = salary_field(job, MAX_SALARY)?;
        Self::new(min, max)
    }

    /// Whether `salary` lies inside the closed interval.
    pub fn contains(&self, salary: impl Into<i128>) -> bool {
        let salary = salary.into();
        i128::from(self.min) <= salary && salary <= i128::from(self.max)
    }
}

fn salary_field(job: &JobRecord, field: &'static str) -> Result<u64, ValidationError> {
    let value = job
        .get(field)
        .ok_or(ValidationKind::MissingField(field))?;
    parse_salary(value).ok_or_else(|| {
        ValidationKind::NotAnInteger {
            field,
            value: value.to_string(),
        }
        .into()
    })
}

/// A target salary, given either as a native integer or as text.
pub trait SalaryInput {
    /// Resolve to an integer, failing if the text is not a numeric string.
    fn to_salary(&self) -> Result<i128, ValidationError>;
}

macro_rules! native_salary_input {
    ($($ty:ty),*) => {
        $(
            impl SalaryInput for $ty {
                fn to_salary(&self) -> Result<i128, ValidationError> {
                    Ok(i128::from(*self))
                }
            }
        )*
    };
}

native_salary_input!(u32, u64, i32, i64);

impl SalaryInput for usize {
    fn to_salary(&self) -> Result<i128, ValidationError> {
        // usize is at most 64 bits on every supported target.
        Ok(*self as i128)
    }
}

impl SalaryInput for str {
    fn to_salary(&self) -> Result<i128, ValidationError> {
        parse_salary(self)
            .map(i128::from)
            .ok_or_else(|| ValidationKind::InvalidSalary(self.to_string()).into())
    }
}

impl SalaryInput for String {
    fn to_salary(&self) -> Result<i128, ValidationError> {
        self.as_str().to_salary()
    }
}

impl<T: SalaryInput + ?Sized> SalaryInput for &T {
    fn to_salary(&self) -> Result<i128, ValidationError> {
        (**self).to_salary()
    }
}

/// Check whether `salary` falls inside the job's `[min_salary, max_salary]`.
///
/// Fails with a [`ValidationError`] when either bound is missing or not a
/// numeric string, when `min_salary > max_salary`, or when `salary` is not an
/// integer. The range is checked before the salary, so an inverted range is
/// reported even if the salary is also bad.
pub fn matches_salary_range<S>(job: &JobRecord, salary: S) -> Result<bool, ValidationError>
where
    S: SalaryInput,
{
    let range = SalaryRange::from_record(job)?;
    let salary = salary.to_salary()?;
    Ok(range.contains(salary))
}
