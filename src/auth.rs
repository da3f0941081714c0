//! Shared-secret handling and per-minute token generation.
//!
//! The secret is read once at startup from the environment variable named
//! by `[auth].secret_env`. A missing or empty secret is a
//! [`ConfigError::MissingSecret`], which stops the process before any
//! client exists.

use chrono::{DateTime, Utc};
use share_core::token::token_at;
use std::fmt;

use crate::error::ConfigError;

/// The pre-shared API secret. Never printed.
#[derive(Clone)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigError::Invalid("API secret must not be empty".to_string()));
        }
        Ok(Self(value))
    }

    /// Read the secret from `var`.
    pub fn from_env(var: &str) -> Result<Self, ConfigError> {
        match std::env::var(var) {
            Ok(value) if !value.is_empty() => Ok(Self(value)),
            _ => Err(ConfigError::MissingSecret {
                var: var.to_string(),
            }),
        }
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Produces the `X-API-Token` value for the current UTC minute.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    secret: Secret,
}

impl TokenGenerator {
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }

    pub fn generate(&self) -> String {
        self.generate_at(Utc::now())
    }

    pub fn generate_at(&self, at: DateTime<Utc>) -> String {
        token_at(self.secret.expose(), at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_missing_env_is_typed_error() {
        let err = Secret::from_env("SHARE_TEST_SECRET_THAT_IS_NEVER_SET").unwrap_err();
        match err {
            ConfigError::MissingSecret { var } => {
                assert_eq!(var, "SHARE_TEST_SECRET_THAT_IS_NEVER_SET")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(Secret::new("").is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let secret = Secret::new("hunter2").unwrap();
        let generator = TokenGenerator::new(secret);
        assert!(!format!("{:?}", generator).contains("hunter2"));
    }

    #[test]
    fn test_generate_at_matches_core_token() {
        let generator = TokenGenerator::new(Secret::new("s3cret").unwrap());
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 14, 30, 0).unwrap();
        assert_eq!(generator.generate_at(at), "c29e701aa8dedb30");
    }

    #[test]
    fn test_same_minute_same_token() {
        let generator = TokenGenerator::new(Secret::new("s3cret").unwrap());
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 14, 30, 5).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 10, 18, 14, 30, 55).unwrap();
        assert_eq!(generator.generate_at(at), generator.generate_at(later));
    }
}
