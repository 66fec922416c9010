pub mod errors;
pub mod models;
pub mod service;

pub use errors::PayrollError;
pub use models::Allowances;
pub use models::Deductions;
pub use models::PayPeriod;
pub use models::PayrollLine;
pub use service::compute;
pub use service::monthly_income_tax;
