//! MySQL implementation of the UserRepository trait.
//!
//! Reads the existing `users` table; this service never writes to it.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use lv_core::domain::entities::user::UserRecord;
use lv_core::errors::DomainError;
use lv_core::repositories::UserRepository;

use super::map_sqlx_error;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
        let query = r#"
            SELECT email
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("find user", e))?;

        match row {
            Some(row) => {
                let email: String = row
                    .try_get("email")
                    .map_err(|e| map_sqlx_error("decode user", e))?;
                Ok(Some(UserRecord::new(email)))
            }
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS found";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("check user", e))?;

        let found: i64 = row
            .try_get("found")
            .map_err(|e| map_sqlx_error("decode user check", e))?;
        Ok(found == 1)
    }
}
