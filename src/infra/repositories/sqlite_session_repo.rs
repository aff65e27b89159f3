use crate::domain::{models::auth::SessionRecord, ports::SessionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteSessionRepo {
    pool: SqlitePool,
}

impl SqliteSessionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepo {
    async fn create(&self, record: &SessionRecord) -> Result<(), AppError> {
        sqlx::query("INSERT INTO sessions (token_hash, email, created_at) VALUES (?, ?, ?)")
            .bind(&record.token_hash).bind(&record.email).bind(record.created_at)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn find(&self, token_hash: &str) -> Result<Option<SessionRecord>, AppError> {
        sqlx::query_as::<_, SessionRecord>("SELECT * FROM sessions WHERE token_hash = ?")
            .bind(token_hash)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }
}
