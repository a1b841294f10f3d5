//! Username validation and [`User`] construction.

pub mod error;
pub mod validator;

pub use error::*;
pub use validator::*;

use crate::config::UserPolicyConfig;
use crate::domain::User;
use tracing::{debug, instrument, warn};

/// Builds [`User`] values after checking the username with a [`UsernameValidator`].
///
/// The factory holds no mutable state and is `Copy`, so it can be shared
/// freely across threads and tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserFactory {
    validator: UsernameValidator,
}

impl UserFactory {
    pub fn new(validator: UsernameValidator) -> Self {
        Self { validator }
    }

    pub fn from_config(config: &UserPolicyConfig) -> Self {
        Self::new(UsernameValidator::from_config(config))
    }

    pub fn validator(&self) -> &UsernameValidator {
        &self.validator
    }

    /// Creates a [`User`] holding `username` unchanged.
    ///
    /// # Errors
    /// [`UserError::ValidationError`] with [`USERNAME_TOO_SHORT`] if the
    /// username has fewer than the configured minimum characters. No `User`
    /// is constructed in that case.
    #[instrument(skip_all)]
    pub fn create(&self, username: impl Into<String>) -> UserResult<User> {
        let username = username.into();
        if !self.validator.validate(&username) {
            warn!(
                length = username.chars().count(),
                min_length = self.validator.min_length(),
                "Rejected username"
            );
            return Err(UserError::username_too_short());
        }

        debug!(length = username.chars().count(), "Created user");
        Ok(User::new(username))
    }
}
