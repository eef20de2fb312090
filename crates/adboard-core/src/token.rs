//! Signed bearer tokens (HS256 JWT) carrying an admin id and an expiry.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Lifetime of a token minted at login.
pub const TOKEN_TTL: Duration = Duration::hours(1);

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Admin account id.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly minted token and the instant it stops being accepted.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies bearer tokens with a server-held secret.
///
/// The secret is handed in once at startup; the issuer never reads the
/// environment itself.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Result<Self, AppError> {
        Self::with_ttl(secret, TOKEN_TTL)
    }

    pub fn with_ttl(secret: &[u8], ttl: Duration) -> Result<Self, AppError> {
        if secret.is_empty() {
            return Err(AppError::ConfigError("token signing secret is empty".into()));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        })
    }

    /// Mint a token for `subject` valid for the configured ttl.
    pub fn issue(&self, subject: Uuid) -> Result<IssuedToken, AppError> {
        self.issue_with_ttl(subject, self.ttl)
    }

    /// Mint a token for `subject` that expires at `now + ttl`.
    pub fn issue_with_ttl(&self, subject: Uuid, ttl: Duration) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + ttl;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Token(format!("Failed to sign token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Check signature and expiry, returning the embedded admin id.
    ///
    /// A token is rejected once the current time reaches its expiry.
    pub fn verify(&self, token: &str) -> Result<Uuid, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::InvalidToken(e.to_string()))?;

        if Utc::now().timestamp() >= data.claims.exp {
            return Err(AppError::InvalidToken("token expired".into()));
        }

        data.claims
            .sub
            .parse()
            .map_err(|_| AppError::InvalidToken("subject is not a valid id".into()))
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
