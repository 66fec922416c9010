pub mod identity;
pub mod leave;
pub mod payroll;
