//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for the HR backend:
//! - Password hashing (Argon2id) and temporary-password generation
//! - JWT token issuance, validation, and claim extraction
//!
//! The domain services define their own authentication flows and adapt these
//! implementations. This keeps credential and token mechanics in one place
//! without coupling them to any particular principal store.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Temporary Passwords
//! ```
//! use auth::generate_temporary;
//!
//! let password = generate_temporary(12).unwrap();
//! assert_eq!(password.chars().count(), 12);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     "hr-backend",
//!     "hr-frontend",
//! )
//! .unwrap();
//! let claims = Claims::for_employee("42", "alice@corp.example", "Alice Smith", "ADMIN", None, None, 8);
//! let token = handler.issue(claims).unwrap();
//! assert!(handler.validate(&token));
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::generate_temporary;
pub use password::DEFAULT_TEMPORARY_LENGTH;
pub use password::PasswordError;
pub use password::PasswordHasher;
