use thiserror::Error;

/// Error for payroll computation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayrollError {
    #[error("Invalid month {month}: expected a value between 1 and 12")]
    InvalidMonth { month: u32 },
    #[error("Basic salary must not be negative")]
    NegativeBasicSalary,
}
