use crate::config::UserPolicyConfig;

/// Minimum number of characters a username must have.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Length predicate for candidate usernames.
///
/// Length is counted in Unicode scalar values (`chars()`), so `"äöü"` is
/// three characters even though it is six bytes. Whitespace and non-ASCII
/// input are not treated specially.
///
/// The minimum never drops below [`MIN_USERNAME_LENGTH`]; a configured value
/// can only tighten it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsernameValidator {
    min_length: usize,
}

impl UsernameValidator {
    /// Values below [`MIN_USERNAME_LENGTH`] are raised to it.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length: min_length.max(MIN_USERNAME_LENGTH),
        }
    }

    pub fn from_config(config: &UserPolicyConfig) -> Self {
        Self::new(config.min_username_length)
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns `true` if `username` has at least [`min_length`](Self::min_length) characters.
    pub fn validate(&self, username: &str) -> bool {
        username.chars().count() >= self.min_length
    }
}

impl Default for UsernameValidator {
    fn default() -> Self {
        Self::new(MIN_USERNAME_LENGTH)
    }
}
