//! Signed session tokens.
//!
//! A session is an HS256 JWT naming the user and their [`Role`]. Nothing is
//! stored server-side, so expiry is the only way a session ends.

use clientdesk_core::roles::Role;
use clientdesk_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

const DEFAULT_SESSION_TTL_MINS: i64 = 60;

/// Signing key and lifetime for session tokens.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub ttl_mins: i64,
}

impl SessionConfig {
    /// Read `JWT_SECRET` (required) and `JWT_ACCESS_EXPIRY_MINS` (default 60).
    ///
    /// # Panics
    ///
    /// Panics if the secret is missing or empty, or the lifetime is not a
    /// whole number of minutes.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .expect("JWT_SECRET must be set and non-empty");

        let ttl_mins = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .ok()
            .map_or(Ok(DEFAULT_SESSION_TTL_MINS), |v| v.parse::<i64>())
            .expect("JWT_ACCESS_EXPIRY_MINS must be a whole number of minutes");

        Self { secret, ttl_mins }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_mins * 60
    }
}

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: DbId,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed token and its lifetime in seconds.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_in: i64,
}

/// Sign a session for `user_id` acting as `role`.
pub fn issue(
    user_id: DbId,
    role: Role,
    config: &SessionConfig,
) -> Result<IssuedSession, jsonwebtoken::errors::Error> {
    let iat = chrono::Utc::now().timestamp();
    let expires_in = config.ttl_secs();
    let claims = SessionClaims {
        sub: user_id,
        role,
        iat,
        exp: iat + expires_in,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;
    Ok(IssuedSession { token, expires_in })
}

/// Check signature and expiry, returning the claims.
///
/// A token whose role is not one of [`Role`]'s names fails to decode.
pub fn verify(token: &str, config: &SessionConfig) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}
