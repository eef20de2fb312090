use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::AppError;

/// A persisted administrator account.
///
/// `password_hash` is a bcrypt string and must never leave the server.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A persisted advertisement.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Ad {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for inserting a new ad into the store.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NewAd {
    pub title: String,
    pub description: String,
}

impl NewAd {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl NewAd {
    /// Presence check: both fields must be non-blank.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title is required".into()));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::Validation("description is required".into()));
        }
        Ok(())
    }
}
