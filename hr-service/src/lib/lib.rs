//! HR backend domain core.
//!
//! Holds the computations behind the HR administration API:
//! - `identity` - credential verification across two principal stores and
//!   bearer-token issuance
//! - `leave` - leave-day accounting over request snapshots
//! - `payroll` - salary, allowance, deduction, and income-tax derivation
//!
//! The HTTP layer and the persistence layer are external collaborators; they
//! talk to this crate through the ports declared per domain and serialize
//! whatever it produces.

pub mod config;
pub mod domain;

pub use domain::identity;
pub use domain::leave;
pub use domain::payroll;
