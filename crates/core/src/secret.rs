//! Shared-secret verification for inbound automation callbacks.

use sha2::{Digest, Sha256};

/// Result of checking a callback's shared secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretCheck {
    /// A secret is configured and the request presented it.
    Verified,
    /// No secret is configured; every request is accepted.
    Open,
    /// A secret is configured and the request's value is missing or wrong.
    Rejected,
}

impl SecretCheck {
    pub fn is_allowed(self) -> bool {
        !matches!(self, SecretCheck::Rejected)
    }
}

/// Compare the presented secret against the configured one.
///
/// Both sides are hashed before comparison so the comparison time does not
/// depend on how many leading bytes of the secret were guessed correctly.
pub fn check_shared_secret(expected: Option<&str>, presented: Option<&str>) -> SecretCheck {
    let Some(expected) = expected else {
        return SecretCheck::Open;
    };
    match presented {
        Some(presented) if digest(presented) == digest(expected) => SecretCheck::Verified,
        _ => SecretCheck::Rejected,
    }
}

fn digest(value: &str) -> Vec<u8> {
    Sha256::digest(value.as_bytes()).to_vec()
}
