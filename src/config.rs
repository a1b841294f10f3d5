//! Policy settings for user construction.

use serde::{Deserialize, Serialize};

use crate::user_factory::MIN_USERNAME_LENGTH;

/// Settings consumed by [`UserFactory::from_config`](crate::user_factory::UserFactory::from_config).
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserPolicyConfig {
    /// Minimum username length in characters. Values below
    /// [`MIN_USERNAME_LENGTH`] are raised to it.
    pub min_username_length: usize,
}

impl Default for UserPolicyConfig {
    fn default() -> Self {
        Self {
            min_username_length: MIN_USERNAME_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_minimum_is_three() {
        assert_eq!(UserPolicyConfig::default().min_username_length, 3);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: UserPolicyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, UserPolicyConfig::default());

        let config: UserPolicyConfig =
            serde_json::from_str(r#"{"min_username_length": 8}"#).unwrap();
        assert_eq!(config.min_username_length, 8);
    }
}
