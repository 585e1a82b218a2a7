//! Error types for dweeder operations.

use thiserror::Error as ThisError;

use crate::validation::ValidationErrors;

/// Result type that uses [`crate::Error`].
pub type Result<T> = std::result::Result<T, crate::Error>;

/// Dweeder errors.
#[allow(missing_docs)]
#[derive(Debug, ThisError)]
pub enum Error {
    /// The record failed validation and was not saved.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("No such record exists")]
    NotFound,
    #[error("Not following that user")]
    NotFollowing,
    #[error("Users cannot follow themselves")]
    SelfFollow,
    #[error("Record has not been saved")]
    NotSaved,
    #[error("Configuration error {0}")]
    Config(String),
    #[error("Database error {0}")]
    Butane(butane::Error),
    #[error("Hashing error {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),
    #[error("(De)serialization error {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("IO error {0}")]
    IO(#[from] std::io::Error),
}

impl From<butane::Error> for Error {
    fn from(e: butane::Error) -> Self {
        match e {
            butane::Error::NoSuchObject => Error::NotFound,
            e => Error::Butane(e),
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Validation(errors)
    }
}

impl Error {
    /// The validation errors, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            Error::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
