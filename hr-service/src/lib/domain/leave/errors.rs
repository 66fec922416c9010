use thiserror::Error;

/// Error for leave accounting operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LeaveError {
    #[error("Invalid leave status '{0}': expected one of PENDING, APPROVED, REJECTED, CANCELLED")]
    InvalidStatus(String),
}
