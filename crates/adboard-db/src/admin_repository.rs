use chrono::{DateTime, Utc};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

use adboard_core::error::AppError;
use adboard_core::models::AdminAccount;
use adboard_core::traits::CredentialStore;

/// Repository for admin accounts in PostgreSQL.
#[derive(Clone)]
pub struct AdminRepository {
    pool: Pool<Postgres>,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the account registered under `email`.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>, AppError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM admins
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// Insert a new account. A duplicate email surfaces as [`AppError::Conflict`].
    pub async fn create(&self, email: &str, password_hash: &str) -> Result<AdminAccount, AppError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            INSERT INTO admins (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Admin already exists".into())
            }
            e => AppError::DatabaseError(e.to_string()),
        })?;

        Ok(row.into())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM admins"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct AdminRow {
    id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<AdminRow> for AdminAccount {
    fn from(row: AdminRow) -> Self {
        AdminAccount {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

// -- Trait implementation --

impl CredentialStore for AdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>, AppError> {
        AdminRepository::find_by_email(self, email).await
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<AdminAccount, AppError> {
        AdminRepository::create(self, email, password_hash).await
    }
}
