//! Error types for user construction.

use thiserror::Error;

/// Message carried by [`UserError::ValidationError`] when a username is under the minimum length.
pub const USERNAME_TOO_SHORT: &str = "Username too short";

/// Errors that can occur while building a [`User`](crate::domain::User).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    /// The username failed the length policy.
    #[error("{0}")]
    ValidationError(String),
}

impl UserError {
    pub fn username_too_short() -> Self {
        UserError::ValidationError(USERNAME_TOO_SHORT.to_string())
    }
}

pub type UserResult<T> = Result<T, UserError>;
