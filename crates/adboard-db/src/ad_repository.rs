use chrono::{DateTime, Utc};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

use adboard_core::error::AppError;
use adboard_core::models::{Ad, NewAd};
use adboard_core::traits::AdStore;

/// Repository for ads in PostgreSQL.
#[derive(Clone)]
pub struct AdRepository {
    pool: Pool<Postgres>,
}

impl AdRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All ads in insertion order.
    pub async fn list(&self) -> Result<Vec<Ad>, AppError> {
        let rows = sqlx::query_as::<_, AdRow>(
            r#"
            SELECT id, title, description, created_at, updated_at
            FROM ads
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, ad: &NewAd) -> Result<Ad, AppError> {
        let row = sqlx::query_as::<_, AdRow>(
            r#"
            INSERT INTO ads (title, description)
            VALUES ($1, $2)
            RETURNING id, title, description, created_at, updated_at
            "#,
        )
        .bind(&ad.title)
        .bind(&ad.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct AdRow {
    id: Uuid,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AdRow> for Ad {
    fn from(row: AdRow) -> Self {
        Ad {
            id: row.id,
            title: row.title,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// -- Trait implementation --

impl AdStore for AdRepository {
    async fn list(&self) -> Result<Vec<Ad>, AppError> {
        AdRepository::list(self).await
    }

    async fn create(&self, ad: &NewAd) -> Result<Ad, AppError> {
        AdRepository::create(self, ad).await
    }
}
