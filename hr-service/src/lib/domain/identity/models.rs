use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::identity::errors::EmailError;

/// Role assumed when a stored account carries no role of its own.
pub const DEFAULT_ROLE: &str = "USER";

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which credential store an authenticated principal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrincipalKind {
    Employee,
    User,
}

impl PrincipalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrincipalKind::Employee => "Employee",
            PrincipalKind::User => "User",
        }
    }
}

/// Canonical identity produced by a successful authentication.
///
/// A view over whichever account record matched, never persisted itself.
/// The HTTP layer serializes it into the login response and the token
/// claims are derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Principal {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Login name: the email itself for employees, the legacy username for
    /// accounts from the user store.
    pub username: String,
    pub role: String,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub kind: PrincipalKind,
}

/// Credential record in the primary employee store.
#[derive(Debug, Clone)]
pub struct EmployeeAccount {
    pub id: i64,
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
}

impl EmployeeAccount {
    /// Map this record into the canonical principal view.
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id,
            name: self.name.clone(),
            email: self.email.as_str().to_string(),
            username: self.email.as_str().to_string(),
            role: effective_role(self.role.as_deref()),
            department: self.department.clone(),
            designation: self.designation.clone(),
            kind: PrincipalKind::Employee,
        }
    }
}

/// Credential record in the legacy user store.
///
/// Kept around for accounts that predate the employee directory. The store
/// holds a single full-name field; the display name is derived by splitting
/// it at the first space into first/last components.
#[derive(Debug, Clone)]
pub struct LegacyUserAccount {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub role: Option<String>,
}

impl LegacyUserAccount {
    /// Map this record into the canonical principal view.
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id,
            name: display_name(&self.full_name),
            email: self.email.clone(),
            username: self.username.clone(),
            role: effective_role(self.role.as_deref()),
            department: None,
            designation: None,
            kind: PrincipalKind::User,
        }
    }
}

fn effective_role(role: Option<&str>) -> String {
    match role {
        Some(r) if !r.trim().is_empty() => r.to_string(),
        _ => DEFAULT_ROLE.to_string(),
    }
}

fn display_name(full_name: &str) -> String {
    let trimmed = full_name.trim();
    match trimmed.split_once(' ') {
        Some((first, last)) => format!("{} {}", first, last.trim_start()),
        None => trimmed.to_string(),
    }
}
