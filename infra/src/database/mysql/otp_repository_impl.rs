//! MySQL implementation of the OtpRepository trait.
//!
//! Each email owns at most one row in `otp_entries`. Replacement is a single
//! `INSERT ... ON DUPLICATE KEY UPDATE`, and consumption deletes by
//! `(email, secret_hash)` so a stale reader can never remove a newer code.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lv_shared::utils::mask_email;
use sqlx::{MySqlPool, Row};

use lv_core::domain::entities::otp_entry::OtpEntry;
use lv_core::errors::DomainError;
use lv_core::repositories::OtpRepository;

use super::map_sqlx_error;

/// MySQL implementation of OtpRepository
pub struct MySqlOtpRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    /// Create a new MySQL OTP repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: &sqlx::mysql::MySqlRow) -> Result<OtpEntry, DomainError> {
        Ok(OtpEntry {
            email: row
                .try_get("email")
                .map_err(|e| map_sqlx_error("decode email", e))?,
            secret_hash: row
                .try_get("secret_hash")
                .map_err(|e| map_sqlx_error("decode secret_hash", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| map_sqlx_error("decode expires_at", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| map_sqlx_error("decode created_at", e))?,
        })
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn upsert(&self, entry: &OtpEntry) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO otp_entries (email, secret_hash, expires_at, created_at)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                secret_hash = VALUES(secret_hash),
                expires_at = VALUES(expires_at),
                created_at = VALUES(created_at)
        "#;

        sqlx::query(query)
            .bind(&entry.email)
            .bind(&entry.secret_hash)
            .bind(entry.expires_at)
            .bind(entry.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(&entry.email),
                    error = %e,
                    event = "otp_store_write_failed",
                    "Failed to upsert passcode"
                );
                map_sqlx_error("upsert otp entry", e)
            })?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<OtpEntry>, DomainError> {
        let query = r#"
            SELECT email, secret_hash, expires_at, created_at
            FROM otp_entries
            WHERE email = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("find otp entry", e))?;

        row.as_ref().map(Self::row_to_entry).transpose()
    }

    async fn delete_matching(&self, email: &str, secret_hash: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM otp_entries WHERE email = ? AND secret_hash = ?")
            .bind(email)
            .bind(secret_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete otp entry", e))?;

        Ok(result.rows_affected() == 1)
    }
}
