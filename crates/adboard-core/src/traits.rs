use std::future::Future;

use crate::error::AppError;
use crate::models::{Ad, AdminAccount, NewAd};

/// Persists and looks up administrator accounts.
pub trait CredentialStore: Send + Sync + Clone {
    /// Find the account registered under `email`, if any.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<AdminAccount>, AppError>> + Send;

    /// Insert a new account.
    ///
    /// Returns [`AppError::Conflict`] when an account with this email exists.
    fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> impl Future<Output = Result<AdminAccount, AppError>> + Send;
}

/// Persists and lists ads.
pub trait AdStore: Send + Sync + Clone {
    /// All ads, oldest first.
    fn list(&self) -> impl Future<Output = Result<Vec<Ad>, AppError>> + Send;

    fn create(&self, ad: &NewAd) -> impl Future<Output = Result<Ad, AppError>> + Send;
}
