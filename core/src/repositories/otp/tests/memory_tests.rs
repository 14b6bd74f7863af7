//! Unit tests for the in-memory OTP repository

use chrono::{Duration, Utc};

use crate::domain::entities::otp_entry::OtpEntry;
use crate::errors::DomainError;
use crate::repositories::otp::{InMemoryOtpRepository, OtpRepository};

fn entry(email: &str, hash: &str) -> OtpEntry {
    OtpEntry::issue(email, hash, Utc::now(), Duration::minutes(5))
}

#[tokio::test]
async fn test_upsert_replaces_existing_entry() {
    let repo = InMemoryOtpRepository::new();

    repo.upsert(&entry("u@test.com", "first")).await.unwrap();
    repo.upsert(&entry("u@test.com", "second")).await.unwrap();

    assert_eq!(repo.len().await, 1);
    let stored = repo.find_by_email("u@test.com").await.unwrap().unwrap();
    assert_eq!(stored.secret_hash, "second");
}

#[tokio::test]
async fn test_delete_matching_requires_same_hash() {
    let repo = InMemoryOtpRepository::new();
    repo.upsert(&entry("u@test.com", "current")).await.unwrap();

    assert!(!repo.delete_matching("u@test.com", "stale").await.unwrap());
    assert!(repo.get("u@test.com").await.is_some());

    assert!(repo.delete_matching("u@test.com", "current").await.unwrap());
    assert!(repo.is_empty().await);

    assert!(!repo.delete_matching("u@test.com", "current").await.unwrap());
}

#[tokio::test]
async fn test_entries_are_keyed_by_email() {
    let repo = InMemoryOtpRepository::new();
    repo.upsert(&entry("a@x.com", "a")).await.unwrap();
    repo.upsert(&entry("b@x.com", "b")).await.unwrap();

    assert!(repo.delete_matching("a@x.com", "a").await.unwrap());
    assert_eq!(repo.get("b@x.com").await.unwrap().secret_hash, "b");
}

#[tokio::test]
async fn test_backdate_moves_expiry() {
    let repo = InMemoryOtpRepository::new();
    let original = entry("u@test.com", "h");
    repo.upsert(&original).await.unwrap();

    assert!(repo.backdate("u@test.com", Duration::minutes(6)).await);
    let stored = repo.get("u@test.com").await.unwrap();
    assert_eq!(stored.expires_at, original.expires_at - Duration::minutes(6));
    assert!(stored.is_expired());

    assert!(!repo.backdate("missing@test.com", Duration::minutes(1)).await);
}

#[tokio::test]
async fn test_unavailable_store() {
    let repo = InMemoryOtpRepository::new();
    repo.set_should_fail(true);

    let result = repo.upsert(&entry("u@test.com", "h")).await;
    assert!(matches!(result, Err(DomainError::StoreUnavailable { .. })));
    let result = repo.find_by_email("u@test.com").await;
    assert!(matches!(result, Err(DomainError::StoreUnavailable { .. })));
}
