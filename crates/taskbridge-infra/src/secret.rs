//! Environment-sourced secrets.
//!
//! Tokens and the webhook signing secret come only from the environment and
//! are wrapped in [`SecretString`] immediately so they never appear in
//! Debug output or logs.

use secrecy::SecretString;
use thiserror::Error;

/// Error for a missing required secret.
#[derive(Debug, Error)]
#[error("missing required environment variable '{0}'")]
pub struct MissingSecret(pub String);

/// Read a required secret from the environment.
///
/// Empty values are treated as missing: an accidentally blank variable
/// should fail loudly at startup, not at the first API call.
pub fn require_env(name: &str) -> Result<SecretString, MissingSecret> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(SecretString::from(value)),
        _ => Err(MissingSecret(name.to_string())),
    }
}

/// Read an optional secret from the environment.
pub fn optional_env(name: &str) -> Option<SecretString> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(SecretString::from(value)),
        _ => None,
    }
}
