use std::sync::Arc;

use auth::generate_temporary;
use auth::Claims;
use auth::JwtHandler;
use auth::PasswordHasher;
use auth::DEFAULT_TEMPORARY_LENGTH;

use crate::identity::errors::IdentityError;
use crate::identity::models::Principal;
use crate::identity::models::PrincipalKind;
use crate::identity::ports::EmployeeStore;
use crate::identity::ports::LegacyUserStore;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub principal: Principal,
    pub token: String,
}

/// Authentication coordinator over the two credential stores.
///
/// Resolves a login identifier against the employee store first and the
/// legacy user store second, verifies the secret against the stored digest,
/// and issues bearer tokens for the matched principal. The precedence is a
/// deliberate design decision: an employee record shadows a same-identifier
/// legacy record entirely, including for wrong-secret attempts.
pub struct IdentityResolver<ES, US>
where
    ES: EmployeeStore,
    US: LegacyUserStore,
{
    employees: Arc<ES>,
    legacy_users: Arc<US>,
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_expiry_hours: i64,
}

impl<ES, US> IdentityResolver<ES, US>
where
    ES: EmployeeStore,
    US: LegacyUserStore,
{
    /// Create a new identity resolver with injected dependencies.
    ///
    /// # Arguments
    /// * `employees` - Primary credential store
    /// * `legacy_users` - Fallback credential store
    /// * `jwt_handler` - Configured token handler (carries the signing key)
    /// * `token_expiry_hours` - Lifetime of issued tokens
    pub fn new(
        employees: Arc<ES>,
        legacy_users: Arc<US>,
        jwt_handler: JwtHandler,
        token_expiry_hours: i64,
    ) -> Self {
        Self {
            employees,
            legacy_users,
            password_hasher: PasswordHasher::new(),
            jwt_handler,
            token_expiry_hours,
        }
    }

    /// Authenticate an identifier/secret pair.
    ///
    /// Checks the employee store by email first. If an employee record
    /// exists, the decision is made there; the legacy store is only
    /// consulted when no employee record matches the identifier.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identifier or wrong secret,
    ///   indistinguishable by design
    /// * `Store` - A credential store failed
    pub async fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<Principal, IdentityError> {
        if let Some(employee) = self.employees.find_by_email(identifier).await? {
            if self
                .password_hasher
                .verify(secret, &employee.password_hash)?
            {
                return Ok(employee.principal());
            }
            tracing::warn!(identifier, "Failed login attempt");
            return Err(IdentityError::InvalidCredentials);
        }

        if let Some(user) = self.legacy_users.find_by_identifier(identifier).await? {
            if self.password_hasher.verify(secret, &user.password_hash)? {
                return Ok(user.principal());
            }
        }

        tracing::warn!(identifier, "Failed login attempt");
        Err(IdentityError::InvalidCredentials)
    }

    /// Authenticate and issue a bearer token for the matched principal.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Authentication failed
    /// * `Token` - Token issuance failed
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<LoginOutcome, IdentityError> {
        let principal = self.authenticate(identifier, secret).await?;
        let token = self.issue_token(&principal)?;

        tracing::info!(email = %principal.email, "Login successful");
        Ok(LoginOutcome { principal, token })
    }

    /// Issue a bearer token for an already-authenticated principal.
    ///
    /// # Errors
    /// * `Token` - Token issuance failed
    pub fn issue_token(&self, principal: &Principal) -> Result<String, IdentityError> {
        let claims = match principal.kind {
            PrincipalKind::Employee => Claims::for_employee(
                principal.id,
                &principal.email,
                &principal.name,
                &principal.role,
                principal.department.clone(),
                principal.designation.clone(),
                self.token_expiry_hours,
            ),
            PrincipalKind::User => Claims::for_user(
                principal.id,
                &principal.email,
                &principal.name,
                &principal.role,
                &principal.username,
                self.token_expiry_hours,
            ),
        };

        Ok(self.jwt_handler.issue(claims)?)
    }

    /// Change an employee's password after verifying the current one.
    ///
    /// # Errors
    /// * `EmployeeNotFound` - No employee with this email
    /// * `InvalidCredentials` - Current password does not verify
    /// * `Store` - Persisting the new digest failed
    pub async fn change_password(
        &self,
        email: &str,
        current: &str,
        new: &str,
    ) -> Result<(), IdentityError> {
        let employee = self
            .employees
            .find_by_email(email)
            .await?
            .ok_or_else(|| IdentityError::EmployeeNotFound(email.to_string()))?;

        if !self
            .password_hasher
            .verify(current, &employee.password_hash)?
        {
            tracing::warn!(email, "Password change rejected: current password incorrect");
            return Err(IdentityError::InvalidCredentials);
        }

        let new_hash = self.password_hasher.hash(new)?;
        self.employees.update_password(employee.id, &new_hash).await
    }

    /// Reset an employee's password to a fresh temporary one.
    ///
    /// The plaintext is returned so the (out-of-scope) email collaborator can
    /// deliver it; only the digest is persisted.
    ///
    /// # Errors
    /// * `EmployeeNotFound` - No employee with this email
    /// * `Store` - Persisting the new digest failed
    pub async fn reset_password(&self, email: &str) -> Result<String, IdentityError> {
        let employee = self
            .employees
            .find_by_email(email)
            .await?
            .ok_or_else(|| IdentityError::EmployeeNotFound(email.to_string()))?;

        let temporary = generate_temporary(DEFAULT_TEMPORARY_LENGTH)?;
        let hash = self.password_hasher.hash(&temporary)?;
        self.employees.update_password(employee.id, &hash).await?;

        Ok(temporary)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::identity::models::EmailAddress;
    use crate::identity::models::EmployeeAccount;
    use crate::identity::models::LegacyUserAccount;

    mock! {
        pub TestEmployeeStore {}

        #[async_trait]
        impl EmployeeStore for TestEmployeeStore {
            async fn find_by_email(&self, email: &str) -> Result<Option<EmployeeAccount>, IdentityError>;
            async fn update_password(&self, employee_id: i64, password_hash: &str) -> Result<(), IdentityError>;
        }
    }

    mock! {
        pub TestLegacyUserStore {}

        #[async_trait]
        impl LegacyUserStore for TestLegacyUserStore {
            async fn find_by_identifier(&self, identifier: &str) -> Result<Option<LegacyUserAccount>, IdentityError>;
        }
    }

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn resolver(
        employees: MockTestEmployeeStore,
        legacy_users: MockTestLegacyUserStore,
    ) -> IdentityResolver<MockTestEmployeeStore, MockTestLegacyUserStore> {
        let jwt_handler = JwtHandler::new(SECRET, "hr-backend", "hr-frontend").unwrap();
        IdentityResolver::new(Arc::new(employees), Arc::new(legacy_users), jwt_handler, 8)
    }

    fn employee_account(password: &str) -> EmployeeAccount {
        EmployeeAccount {
            id: 42,
            name: "Alice Smith".to_string(),
            email: EmailAddress::new("alice@corp.example".to_string()).unwrap(),
            password_hash: PasswordHasher::new().hash(password).unwrap(),
            role: Some("ADMIN".to_string()),
            department: Some("Engineering".to_string()),
            designation: Some("Staff Engineer".to_string()),
        }
    }

    fn legacy_account(password: &str) -> LegacyUserAccount {
        LegacyUserAccount {
            id: 7,
            username: "bray".to_string(),
            email: "bob@corp.example".to_string(),
            full_name: "Bob Ray".to_string(),
            password_hash: PasswordHasher::new().hash(password).unwrap(),
            role: None,
        }
    }

    #[tokio::test]
    async fn test_employee_authentication_success() {
        let mut employees = MockTestEmployeeStore::new();
        let mut legacy_users = MockTestLegacyUserStore::new();

        employees
            .expect_find_by_email()
            .with(eq("alice@corp.example"))
            .times(1)
            .returning(|_| Ok(Some(employee_account("correct horse"))));
        legacy_users.expect_find_by_identifier().times(0);

        let resolver = resolver(employees, legacy_users);
        let principal = resolver
            .authenticate("alice@corp.example", "correct horse")
            .await
            .expect("Authentication failed");

        assert_eq!(principal.id, 42);
        assert_eq!(principal.role, "ADMIN");
        assert_eq!(principal.kind, PrincipalKind::Employee);
    }

    #[tokio::test]
    async fn test_legacy_fallback_success() {
        let mut employees = MockTestEmployeeStore::new();
        let mut legacy_users = MockTestLegacyUserStore::new();

        employees
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        legacy_users
            .expect_find_by_identifier()
            .with(eq("bray"))
            .times(1)
            .returning(|_| Ok(Some(legacy_account("hunter2hunter2"))));

        let resolver = resolver(employees, legacy_users);
        let principal = resolver
            .authenticate("bray", "hunter2hunter2")
            .await
            .expect("Authentication failed");

        assert_eq!(principal.id, 7);
        assert_eq!(principal.name, "Bob Ray");
        assert_eq!(principal.role, "USER");
        assert_eq!(principal.kind, PrincipalKind::User);
    }

    #[tokio::test]
    async fn test_employee_record_shadows_legacy_record() {
        // Same identifier in both stores, different secrets. The employee
        // entry must win with its own secret and block the legacy secret.
        let mut employees = MockTestEmployeeStore::new();
        let mut legacy_users = MockTestLegacyUserStore::new();

        employees
            .expect_find_by_email()
            .times(2)
            .returning(|_| Ok(Some(employee_account("employee secret"))));
        // Never consulted: the employee record decides both attempts
        legacy_users.expect_find_by_identifier().times(0);

        let resolver = resolver(employees, legacy_users);

        let with_employee_secret = resolver
            .authenticate("alice@corp.example", "employee secret")
            .await;
        assert_eq!(
            with_employee_secret.unwrap().kind,
            PrincipalKind::Employee
        );

        let with_legacy_secret = resolver
            .authenticate("alice@corp.example", "legacy secret")
            .await;
        assert!(matches!(
            with_legacy_secret,
            Err(IdentityError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_unknown_identifier_is_invalid_credentials() {
        let mut employees = MockTestEmployeeStore::new();
        let mut legacy_users = MockTestLegacyUserStore::new();

        employees
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        legacy_users
            .expect_find_by_identifier()
            .times(1)
            .returning(|_| Ok(None));

        let resolver = resolver(employees, legacy_users);
        let result = resolver.authenticate("nobody@corp.example", "whatever").await;

        // Same error as a wrong secret: no account enumeration
        assert!(matches!(result, Err(IdentityError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_issues_validatable_token() {
        let mut employees = MockTestEmployeeStore::new();
        let legacy_users = MockTestLegacyUserStore::new();

        employees
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(employee_account("correct horse"))));

        let resolver = resolver(employees, legacy_users);
        let outcome = resolver
            .login("alice@corp.example", "correct horse")
            .await
            .expect("Login failed");

        let handler = JwtHandler::new(SECRET, "hr-backend", "hr-frontend").unwrap();
        assert!(handler.validate(&outcome.token));

        let claims = handler.decode(&outcome.token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_type, "Employee");
        assert_eq!(claims.department.as_deref(), Some("Engineering"));
        assert_eq!(claims.role, "ADMIN");
    }

    #[tokio::test]
    async fn test_legacy_token_carries_username() {
        let mut employees = MockTestEmployeeStore::new();
        let mut legacy_users = MockTestLegacyUserStore::new();

        employees
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        legacy_users
            .expect_find_by_identifier()
            .times(1)
            .returning(|_| Ok(Some(legacy_account("hunter2hunter2"))));

        let resolver = resolver(employees, legacy_users);
        let outcome = resolver
            .login("bray", "hunter2hunter2")
            .await
            .expect("Login failed");

        let handler = JwtHandler::new(SECRET, "hr-backend", "hr-frontend").unwrap();
        let claims = handler.decode(&outcome.token).unwrap();
        assert_eq!(claims.user_type, "User");
        assert_eq!(claims.username.as_deref(), Some("bray"));
        assert_eq!(claims.department, None);
    }

    #[tokio::test]
    async fn test_change_password_success() {
        let mut employees = MockTestEmployeeStore::new();
        let legacy_users = MockTestLegacyUserStore::new();

        employees
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(employee_account("old password"))));
        employees
            .expect_update_password()
            .withf(|id, hash| {
                *id == 42 && PasswordHasher::new().verify("new password", hash).unwrap()
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let resolver = resolver(employees, legacy_users);
        resolver
            .change_password("alice@corp.example", "old password", "new password")
            .await
            .expect("Password change failed");
    }

    #[tokio::test]
    async fn test_change_password_wrong_current() {
        let mut employees = MockTestEmployeeStore::new();
        let legacy_users = MockTestLegacyUserStore::new();

        employees
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(employee_account("old password"))));
        employees.expect_update_password().times(0);

        let resolver = resolver(employees, legacy_users);
        let result = resolver
            .change_password("alice@corp.example", "not the password", "new password")
            .await;

        assert!(matches!(result, Err(IdentityError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_change_password_unknown_employee() {
        let mut employees = MockTestEmployeeStore::new();
        let legacy_users = MockTestLegacyUserStore::new();

        employees
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let resolver = resolver(employees, legacy_users);
        let result = resolver
            .change_password("nobody@corp.example", "a", "b")
            .await;

        assert!(matches!(result, Err(IdentityError::EmployeeNotFound(_))));
    }

    #[tokio::test]
    async fn test_reset_password_returns_policy_conforming_secret() {
        let mut employees = MockTestEmployeeStore::new();
        let legacy_users = MockTestLegacyUserStore::new();

        employees
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(employee_account("old password"))));
        employees
            .expect_update_password()
            .with(eq(42), always())
            .times(1)
            .returning(|_, _| Ok(()));

        let resolver = resolver(employees, legacy_users);
        let temporary = resolver
            .reset_password("alice@corp.example")
            .await
            .expect("Reset failed");

        assert_eq!(temporary.chars().count(), 12);
        assert!(temporary.chars().any(|c| c.is_ascii_uppercase()));
        assert!(temporary.chars().any(|c| c.is_ascii_lowercase()));
        assert!(temporary.chars().any(|c| c.is_ascii_digit()));
    }
}
