pub mod argon2;
pub mod errors;
pub mod generator;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;
pub use generator::generate_temporary;
pub use generator::DEFAULT_TEMPORARY_LENGTH;
