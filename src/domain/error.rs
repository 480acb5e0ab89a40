// Domain errors
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid calendar year: {0}")]
    InvalidYear(i32),

    #[error("unknown company: {0}")]
    UnknownCompany(String),

    #[error("unknown department: {0}")]
    UnknownDepartment(String),

    #[error("column '{column}' already exists")]
    DuplicateColumn { column: String },

    #[error("column '{column}' has {actual} values, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("dataset is missing columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },
}
