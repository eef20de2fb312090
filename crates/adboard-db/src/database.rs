use adboard_core::AppError;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::ad_repository::AdRepository;
use crate::admin_repository::AdminRepository;
use crate::config::DatabaseConfig;

/// Central database facade. Owns the connection pool, runs migrations
/// and vends repository instances.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL with the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {e}")))?;

        tracing::info!(max_connections = config.max_connections, "Connected to database");
        Ok(Self { pool })
    }

    /// Create a `Database` from an existing pool (useful for testing).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run all pending migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {e}")))?;
        Ok(())
    }

    /// Get an [`AdminRepository`] backed by this pool.
    pub fn admin_repo(&self) -> AdminRepository {
        AdminRepository::new(self.pool.clone())
    }

    /// Get an [`AdRepository`] backed by this pool.
    pub fn ad_repo(&self) -> AdRepository {
        AdRepository::new(self.pool.clone())
    }
}
