//! In-memory implementation of OtpRepository for development and testing

use async_trait::async_trait;
use chrono::Duration;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::otp_entry::OtpEntry;
use crate::errors::DomainError;

use super::trait_::OtpRepository;

/// In-memory OTP store
///
/// A single `RwLock` over the map makes every operation atomic per key.
#[derive(Clone, Default)]
pub struct InMemoryOtpRepository {
    entries: Arc<RwLock<HashMap<String, OtpEntry>>>,
    should_fail: Arc<AtomicBool>,
    latency_ms: Arc<AtomicU64>,
}

impl InMemoryOtpRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored entry for an email
    pub async fn get(&self, email: &str) -> Option<OtpEntry> {
        self.entries.read().await.get(email).cloned()
    }

    /// Number of stored entries, expired ones included
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Shift an entry's timestamps into the past, as if `by` had elapsed
    pub async fn backdate(&self, email: &str, by: Duration) -> bool {
        match self.entries.write().await.get_mut(email) {
            Some(entry) => {
                entry.created_at -= by;
                entry.expires_at -= by;
                true
            }
            None => false,
        }
    }

    /// Make every subsequent call fail as if the store were unreachable
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Delay every subsequent call by `latency`
    pub fn set_latency(&self, latency: std::time::Duration) {
        self.latency_ms
            .store(latency.as_millis() as u64, Ordering::SeqCst);
    }

    async fn check_available(&self) -> Result<(), DomainError> {
        let latency = self.latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(latency)).await;
        }
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::store_unavailable("in-memory otp store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl OtpRepository for InMemoryOtpRepository {
    async fn upsert(&self, entry: &OtpEntry) -> Result<(), DomainError> {
        self.check_available().await?;
        self.entries
            .write()
            .await
            .insert(entry.email.clone(), entry.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<OtpEntry>, DomainError> {
        self.check_available().await?;
        Ok(self.entries.read().await.get(email).cloned())
    }

    async fn delete_matching(&self, email: &str, secret_hash: &str) -> Result<bool, DomainError> {
        self.check_available().await?;
        let mut entries = self.entries.write().await;
        match entries.get(email) {
            Some(entry) if entry.secret_hash == secret_hash => {
                entries.remove(email);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
