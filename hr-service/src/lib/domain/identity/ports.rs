use async_trait::async_trait;

use crate::identity::errors::IdentityError;
use crate::identity::models::EmployeeAccount;
use crate::identity::models::LegacyUserAccount;

/// Persistence operations on the primary employee credential store.
#[async_trait]
pub trait EmployeeStore: Send + Sync + 'static {
    /// Retrieve an employee account by login email.
    ///
    /// # Returns
    /// Optional account (None if not found)
    ///
    /// # Errors
    /// * `Store` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<EmployeeAccount>, IdentityError>;

    /// Replace the stored password digest for an employee.
    ///
    /// # Arguments
    /// * `employee_id` - Account to update
    /// * `password_hash` - New digest in PHC string format
    ///
    /// # Errors
    /// * `EmployeeNotFound` - No account with this id
    /// * `Store` - Storage operation failed
    async fn update_password(
        &self,
        employee_id: i64,
        password_hash: &str,
    ) -> Result<(), IdentityError>;
}

/// Persistence operations on the legacy user credential store.
///
/// Consulted only when the employee store has no record for an identifier;
/// an employee record always shadows a same-identifier legacy one.
#[async_trait]
pub trait LegacyUserStore: Send + Sync + 'static {
    /// Retrieve a legacy account by login identifier (username or email).
    ///
    /// # Returns
    /// Optional account (None if not found)
    ///
    /// # Errors
    /// * `Store` - Storage operation failed
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<LegacyUserAccount>, IdentityError>;
}
