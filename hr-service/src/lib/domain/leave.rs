pub mod errors;
pub mod models;
pub mod service;

pub use errors::LeaveError;
pub use models::LeaveBalance;
pub use models::LeaveRequest;
pub use models::LeaveStatus;
pub use models::LeaveSummary;
pub use service::balance;
pub use service::set_status;
pub use service::summarize;
pub use service::DEFAULT_ANNUAL_ALLOWANCE;
