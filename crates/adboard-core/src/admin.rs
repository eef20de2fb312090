use tokio::task;

use crate::error::AppError;
use crate::models::AdminAccount;
use crate::password::PasswordHasher;
use crate::token::{IssuedToken, TokenIssuer};
use crate::traits::CredentialStore;

/// Plaintext hashed once at startup so that logins for unknown emails
/// still pay for a bcrypt verify.
const DUMMY_PASSWORD: &str = "adboard-dummy-password";

/// Orchestrates admin login and seeding over a [`CredentialStore`].
///
/// Generic over the store so the flow can be exercised without a database.
/// Holds no signing key: seeding never needs one, and login takes the
/// issuer explicitly.
pub struct AdminService<S>
where
    S: CredentialStore,
{
    store: S,
    hasher: PasswordHasher,
    dummy_hash: String,
}

impl<S> AdminService<S>
where
    S: CredentialStore,
{
    pub fn new(store: S, hasher: PasswordHasher) -> Result<Self, AppError> {
        let dummy_hash = hasher.hash(DUMMY_PASSWORD)?;
        Ok(Self {
            store,
            hasher,
            dummy_hash,
        })
    }

    /// Exchange email + password for a bearer token signed by `issuer`.
    ///
    /// Unknown email and wrong password both return [`AppError::Unauthorized`].
    pub async fn login(
        &self,
        issuer: &TokenIssuer,
        email: &str,
        password: &str,
    ) -> Result<IssuedToken, AppError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::Unauthorized);
        }

        let account = self.store.find_by_email(email).await?;
        let stored_hash = match &account {
            Some(account) => account.password_hash.clone(),
            None => self.dummy_hash.clone(),
        };

        let valid = self.verify_blocking(password, stored_hash).await?;

        match account {
            Some(account) if valid => {
                let issued = issuer.issue(account.id)?;
                tracing::info!(admin_id = %account.id, "Admin logged in");
                Ok(issued)
            }
            _ => {
                tracing::warn!("Rejected admin login");
                Err(AppError::Unauthorized)
            }
        }
    }

    /// Create an admin account unless one already exists for `email`.
    pub async fn seed(&self, email: &str, password: &str) -> Result<AdminAccount, AppError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Email and password are required".into(),
            ));
        }

        if self.store.find_by_email(email).await?.is_some() {
            return Err(AppError::Conflict("Admin already exists".into()));
        }

        let password_hash = self.hash_blocking(password).await?;
        let account = self.store.create(email, &password_hash).await?;

        tracing::info!(admin_id = %account.id, "Admin account created");
        Ok(account)
    }

    async fn hash_blocking(&self, password: &str) -> Result<String, AppError> {
        let hasher = self.hasher;
        let password = password.to_string();
        task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::Generic(format!("Password hashing task failed: {e}")))?
    }

    async fn verify_blocking(&self, password: &str, hash: String) -> Result<bool, AppError> {
        let hasher = self.hasher;
        let password = password.to_string();
        task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AppError::Generic(format!("Password verification task failed: {e}")))
    }
}
