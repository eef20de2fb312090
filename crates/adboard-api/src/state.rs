use adboard_core::{AdService, AdminService, AppError, PasswordHasher, TokenIssuer};
use adboard_db::{AdRepository, AdminRepository, Database};

use crate::config::ServerConfig;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub db: Database,
    /// Signs tokens at login; the access gate verifies with the same key.
    pub issuer: TokenIssuer,
    pub admin: AdminService<AdminRepository>,
    pub ads: AdService<AdRepository>,
}

impl AppState {
    pub fn new(db: Database, config: &ServerConfig) -> Result<Self, AppError> {
        let hasher = PasswordHasher::new(config.bcrypt_cost)?;
        let issuer = TokenIssuer::new(config.jwt_secret.as_bytes())?;
        let admin = AdminService::new(db.admin_repo(), hasher)?;
        let ads = AdService::new(db.ad_repo());
        Ok(Self {
            db,
            issuer,
            admin,
            ads,
        })
    }
}
