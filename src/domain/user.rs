use serde::{Deserialize, Serialize};

use crate::user_factory::{UserError, UserFactory};

/// Represents a user whose username passed validation.
///
/// Instances only come out of [`UserFactory::create`], so every `User`
/// carries a username that met the length policy at construction time.
/// There are no mutators.
///
/// Deserialization goes through [`UserFactory::default`] as well, so a
/// payload with a short username is rejected instead of producing a `User`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UserCreate")]
pub struct User {
    username: String,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
}

impl User {
    /// Only the factory builds users.
    pub(crate) fn new(username: String) -> Self {
        Self { username }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn into_username(self) -> String {
        self.username
    }
}

impl AsRef<str> for User {
    fn as_ref(&self) -> &str {
        &self.username
    }
}

impl From<User> for String {
    fn from(user: User) -> Self {
        user.username
    }
}

impl TryFrom<UserCreate> for User {
    type Error = UserError;

    fn try_from(params: UserCreate) -> Result<Self, Self::Error> {
        UserFactory::default().create(params.username)
    }
}
