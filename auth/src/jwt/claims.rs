use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Principal type marker embedded in every token.
pub const USER_TYPE_EMPLOYEE: &str = "Employee";
/// Principal type marker for the legacy user store.
pub const USER_TYPE_USER: &str = "User";

/// Claims embedded in an HR backend access token.
///
/// One claim set covers both principal shapes: employee tokens carry
/// `department`/`designation`, legacy user tokens carry `username`, and
/// `user_type` records which store authenticated the caller. Issuer and
/// audience are stamped by [`JwtHandler::issue`](super::JwtHandler::issue)
/// from its configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (principal identifier)
    pub sub: String,

    /// Login email address
    pub email: String,

    /// Display name
    pub name: String,

    /// Flat role string, conventionally "ADMIN" or "USER"
    pub role: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Which principal store authenticated the subject
    #[serde(rename = "userType")]
    pub user_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Claims {
    /// Create claims for an employee principal.
    ///
    /// # Arguments
    /// * `subject` - Employee identifier
    /// * `email` - Login email
    /// * `name` - Display name
    /// * `role` - Role string
    /// * `department` - Organizational department, if any
    /// * `designation` - Job designation, if any
    /// * `expiry_hours` - Hours until the token expires
    pub fn for_employee(
        subject: impl ToString,
        email: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        department: Option<String>,
        designation: Option<String>,
        expiry_hours: i64,
    ) -> Self {
        let mut claims = Self::base(subject, email, name, role, expiry_hours);
        claims.user_type = USER_TYPE_EMPLOYEE.to_string();
        claims.department = department;
        claims.designation = designation;
        claims
    }

    /// Create claims for a legacy user principal.
    ///
    /// # Arguments
    /// * `subject` - User identifier
    /// * `email` - Login email
    /// * `name` - Display name
    /// * `role` - Role string
    /// * `username` - Legacy username
    /// * `expiry_hours` - Hours until the token expires
    pub fn for_user(
        subject: impl ToString,
        email: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        username: impl Into<String>,
        expiry_hours: i64,
    ) -> Self {
        let mut claims = Self::base(subject, email, name, role, expiry_hours);
        claims.user_type = USER_TYPE_USER.to_string();
        claims.username = Some(username.into());
        claims
    }

    fn base(
        subject: impl ToString,
        email: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        expiry_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiry_hours);

        Self {
            sub: subject.to_string(),
            email: email.into(),
            name: name.into(),
            role: role.into(),
            iss: String::new(),
            aud: String::new(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            user_type: String::new(),
            department: None,
            designation: None,
            username: None,
        }
    }

    /// Check if the token is expired at the given instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
