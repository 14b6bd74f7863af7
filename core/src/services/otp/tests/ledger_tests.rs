//! Unit tests for the OTP ledger

use async_trait::async_trait;
use chrono::Duration;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::entities::otp_entry::OtpEntry;
use crate::errors::DomainError;
use crate::repositories::otp::{InMemoryOtpRepository, OtpRepository};
use crate::services::otp::{ConsumeOutcome, OtpLedger};

use super::mocks::test_config;

fn ledger() -> (OtpLedger<InMemoryOtpRepository>, InMemoryOtpRepository) {
    let store = InMemoryOtpRepository::new();
    let ledger = OtpLedger::new(Arc::new(store.clone()), &test_config());
    (ledger, store)
}

#[tokio::test]
async fn test_issue_stores_only_the_hash() {
    let (ledger, store) = ledger();

    let issued = ledger.issue("u@test.com").await.unwrap();

    let entry = store.get("u@test.com").await.unwrap();
    assert_ne!(entry.secret_hash, issued.code.expose());
    assert!(!entry.secret_hash.contains(issued.code.expose()));
    assert_eq!(entry.expires_at, issued.expires_at);
    assert_eq!(entry.expires_at - entry.created_at, Duration::minutes(5));
}

#[tokio::test]
async fn test_consume_success_removes_entry() {
    let (ledger, store) = ledger();
    let issued = ledger.issue("u@test.com").await.unwrap();

    let outcome = ledger.consume("u@test.com", issued.code.expose()).await.unwrap();
    assert_eq!(outcome, ConsumeOutcome::Success);
    assert!(store.get("u@test.com").await.is_none());

    let again = ledger.consume("u@test.com", issued.code.expose()).await.unwrap();
    assert_eq!(again, ConsumeOutcome::NotFound);
}

#[tokio::test]
async fn test_consume_mismatch_keeps_entry() {
    let (ledger, store) = ledger();
    let issued = ledger.issue("u@test.com").await.unwrap();

    for _ in 0..5 {
        let outcome = ledger.consume("u@test.com", "000000").await.unwrap();
        assert_eq!(outcome, ConsumeOutcome::Invalid);
    }
    assert!(store.get("u@test.com").await.is_some());

    let outcome = ledger.consume("u@test.com", issued.code.expose()).await.unwrap();
    assert_eq!(outcome, ConsumeOutcome::Success);
}

#[tokio::test]
async fn test_consume_malformed_code_is_invalid() {
    let (ledger, store) = ledger();
    ledger.issue("u@test.com").await.unwrap();

    for bad in ["", "12345", "1234567", "abcdef", "12 456"] {
        let outcome = ledger.consume("u@test.com", bad).await.unwrap();
        assert_eq!(outcome, ConsumeOutcome::Invalid);
    }
    assert!(store.get("u@test.com").await.is_some());
}

#[tokio::test]
async fn test_consume_expired_purges_entry() {
    let (ledger, store) = ledger();
    let issued = ledger.issue("u@test.com").await.unwrap();
    store.backdate("u@test.com", Duration::minutes(6)).await;

    let outcome = ledger.consume("u@test.com", issued.code.expose()).await.unwrap();
    assert_eq!(outcome, ConsumeOutcome::Expired);
    assert!(store.get("u@test.com").await.is_none());

    let again = ledger.consume("u@test.com", issued.code.expose()).await.unwrap();
    assert_eq!(again, ConsumeOutcome::NotFound);
}

#[tokio::test]
async fn test_expired_entry_purged_even_for_wrong_code() {
    let (ledger, store) = ledger();
    ledger.issue("u@test.com").await.unwrap();
    store.backdate("u@test.com", Duration::minutes(10)).await;

    let outcome = ledger.consume("u@test.com", "000000").await.unwrap();
    assert_eq!(outcome, ConsumeOutcome::Expired);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_reissue_replaces_entry() {
    let (ledger, store) = ledger();
    let first = ledger.issue("u@test.com").await.unwrap();
    let second = ledger.issue("u@test.com").await.unwrap();

    assert_eq!(store.len().await, 1);

    let outcome = ledger.consume("u@test.com", first.code.expose()).await.unwrap();
    if first.code != second.code {
        assert_eq!(outcome, ConsumeOutcome::Invalid);
        let outcome = ledger.consume("u@test.com", second.code.expose()).await.unwrap();
        assert_eq!(outcome, ConsumeOutcome::Success);
    } else {
        assert_eq!(outcome, ConsumeOutcome::Success);
    }
}

#[tokio::test]
async fn test_concurrent_consume_succeeds_once() {
    let (ledger, store) = ledger();
    let ledger = Arc::new(ledger);
    let issued = ledger.issue("u@test.com").await.unwrap();
    let code = issued.code.expose().to_string();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ledger = ledger.clone();
            let code = code.clone();
            tokio::spawn(async move { ledger.consume("u@test.com", &code).await.unwrap() })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            ConsumeOutcome::Success => successes += 1,
            ConsumeOutcome::NotFound => {}
            other => panic!("unexpected outcome {:?}", other),
        }
    }
    assert_eq!(successes, 1);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_concurrent_issue_leaves_single_entry() {
    let (ledger, store) = ledger();
    let ledger = Arc::new(ledger);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ledger = ledger.clone();
            tokio::spawn(async move { ledger.issue("u@test.com").await.unwrap() })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_store_failure_is_unavailable() {
    let (ledger, store) = ledger();
    store.set_should_fail(true);

    let result = ledger.issue("u@test.com").await;
    assert!(matches!(result, Err(DomainError::StoreUnavailable { .. })));

    let result = ledger.consume("u@test.com", "123456").await;
    assert!(matches!(result, Err(DomainError::StoreUnavailable { .. })));
}

#[tokio::test]
async fn test_slow_store_times_out() {
    let (ledger, store) = ledger();
    store.set_latency(std::time::Duration::from_secs(5));

    let result = ledger.issue("u@test.com").await;
    match result {
        Err(DomainError::StoreUnavailable { message }) => assert!(message.contains("timed out")),
        other => panic!("expected StoreUnavailable, got {:?}", other.map(|_| ())),
    }
}

/// Store that lets a re-issue land between a consumer's read and its delete
struct ReissueOnFind {
    inner: Arc<InMemoryOtpRepository>,
    issuer: OtpLedger<InMemoryOtpRepository>,
    armed: AtomicBool,
    reissued_code: tokio::sync::Mutex<Option<String>>,
}

impl ReissueOnFind {
    fn new(inner: InMemoryOtpRepository) -> Self {
        let inner = Arc::new(inner);
        Self {
            issuer: OtpLedger::new(inner.clone(), &test_config()),
            inner,
            armed: AtomicBool::new(false),
            reissued_code: tokio::sync::Mutex::new(None),
        }
    }
}

#[async_trait]
impl OtpRepository for ReissueOnFind {
    async fn upsert(&self, entry: &OtpEntry) -> Result<(), DomainError> {
        self.inner.upsert(entry).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<OtpEntry>, DomainError> {
        let seen = self.inner.find_by_email(email).await?;
        if self.armed.swap(false, Ordering::SeqCst) {
            let issued = self.issuer.issue(email).await?;
            *self.reissued_code.lock().await = Some(issued.code.expose().to_string());
        }
        Ok(seen)
    }

    async fn delete_matching(&self, email: &str, secret_hash: &str) -> Result<bool, DomainError> {
        self.inner.delete_matching(email, secret_hash).await
    }
}

#[tokio::test]
async fn test_reissue_between_read_and_delete_wins() {
    let memory = InMemoryOtpRepository::new();
    let store = Arc::new(ReissueOnFind::new(memory.clone()));
    let ledger = OtpLedger::new(store.clone(), &test_config());

    let old = ledger.issue("u@test.com").await.unwrap();
    let old_hash = memory.get("u@test.com").await.unwrap().secret_hash;

    store.armed.store(true, Ordering::SeqCst);
    let outcome = ledger.consume("u@test.com", old.code.expose()).await.unwrap();
    assert_eq!(outcome, ConsumeOutcome::NotFound);

    let survivor = memory.get("u@test.com").await.unwrap();
    assert_ne!(survivor.secret_hash, old_hash);

    let new_code = store.reissued_code.lock().await.clone().unwrap();
    let outcome = ledger.consume("u@test.com", &new_code).await.unwrap();
    assert_eq!(outcome, ConsumeOutcome::Success);
    assert!(memory.get("u@test.com").await.is_none());
}
