//! Access gate for token-protected routes.
//!
//! Independent of any HTTP framework: callers hand in the raw
//! `Authorization` header value and get back either the authenticated
//! admin or a rejection. The API crate wraps this in axum middleware.

use uuid::Uuid;

use crate::error::AppError;
use crate::token::TokenIssuer;

const BEARER_PREFIX: &str = "Bearer ";

/// Anything that can turn a bearer token into an admin id.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Uuid, AppError>;
}

impl TokenVerifier for TokenIssuer {
    fn verify(&self, token: &str) -> Result<Uuid, AppError> {
        TokenIssuer::verify(self, token)
    }
}

/// Request context attached by the gate once a token has been accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
}

/// Why the gate turned a request away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    /// No `Authorization: Bearer <token>` header. The verifier was not consulted.
    MissingToken,
    /// A token was presented but failed verification.
    InvalidToken,
}

impl GateRejection {
    pub fn message(&self) -> &'static str {
        match self {
            GateRejection::MissingToken => "Unauthorized",
            GateRejection::InvalidToken => "Invalid token",
        }
    }
}

/// Pull the token out of a `Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    header?
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Decide whether a request may proceed.
pub fn authorize<V: TokenVerifier + ?Sized>(
    header: Option<&str>,
    verifier: &V,
) -> Result<AuthenticatedAdmin, GateRejection> {
    let Some(token) = bearer_token(header) else {
        return Err(GateRejection::MissingToken);
    };

    match verifier.verify(token) {
        Ok(admin_id) => Ok(AuthenticatedAdmin { admin_id }),
        Err(e) => {
            tracing::debug!("Rejected bearer token: {e}");
            Err(GateRejection::InvalidToken)
        }
    }
}
