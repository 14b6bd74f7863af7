//! The OTP ledger: issuance and single-use consumption of passcodes

use chrono::{Duration, Utc};
use lv_shared::utils::mask_email;
use std::sync::Arc;

use crate::domain::entities::otp_entry::OtpEntry;
use crate::domain::value_objects::OtpCode;
use crate::errors::DomainResult;
use crate::repositories::otp::OtpRepository;

use super::config::OtpServiceConfig;
use super::deadline::store_call;
use super::hasher::OtpHasher;
use super::types::{ConsumeOutcome, IssuedOtp};

/// Keeps at most one live passcode per email in the durable store
///
/// The ledger itself is stateless. Per-email atomicity comes from the store:
/// issuance is one upsert, and consumption ends with a delete that only
/// succeeds if the entry read earlier is still the one stored.
pub struct OtpLedger<O: OtpRepository> {
    store: Arc<O>,
    hasher: OtpHasher,
    validity: Duration,
    store_timeout: std::time::Duration,
}

impl<O: OtpRepository> OtpLedger<O> {
    /// Create a ledger over `store`
    pub fn new(store: Arc<O>, config: &OtpServiceConfig) -> Self {
        Self {
            store,
            hasher: OtpHasher::new(config.bcrypt_cost),
            validity: config.validity,
            store_timeout: config.store_timeout,
        }
    }

    /// Length of the validity window
    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Issue a fresh code for `email`, replacing any pending one
    ///
    /// The caller is responsible for checking that the email belongs to a
    /// user. The returned code is the only copy of the plaintext.
    ///
    /// # Errors
    ///
    /// * `DomainError::StoreUnavailable` - The upsert failed or timed out
    pub async fn issue(&self, email: &str) -> DomainResult<IssuedOtp> {
        let code = OtpCode::generate();
        let secret_hash = self.hasher.hash(&code).await?;
        let entry = OtpEntry::issue(email, secret_hash, Utc::now(), self.validity);

        store_call(self.store_timeout, "upsert", self.store.upsert(&entry)).await?;

        tracing::info!(
            email = %mask_email(email),
            expires_at = %entry.expires_at,
            event = "otp_issued",
            "Issued one-time passcode"
        );

        Ok(IssuedOtp {
            code,
            expires_at: entry.expires_at,
        })
    }

    /// Check `submitted` against the pending code for `email`
    ///
    /// A match removes the entry, so a code is accepted at most once. A
    /// mismatch keeps it; there is no attempt limit inside the window.
    /// Expired entries are removed when they are encountered.
    ///
    /// # Errors
    ///
    /// * `DomainError::StoreUnavailable` - A store call failed or timed out
    /// * `DomainError::Internal` - The stored hash could not be parsed
    pub async fn consume(&self, email: &str, submitted: &str) -> DomainResult<ConsumeOutcome> {
        let masked = mask_email(email);

        let entry = match store_call(
            self.store_timeout,
            "find_by_email",
            self.store.find_by_email(email),
        )
        .await?
        {
            Some(entry) => entry,
            None => {
                tracing::debug!(email = %masked, event = "otp_not_found", "No pending passcode");
                return Ok(ConsumeOutcome::NotFound);
            }
        };

        if entry.is_expired_at(Utc::now()) {
            return self.discard_expired(&entry).await;
        }

        if !OtpCode::is_well_formed(submitted) {
            tracing::debug!(email = %masked, event = "otp_malformed", "Submitted code is not six digits");
            return Ok(ConsumeOutcome::Invalid);
        }

        if !self.hasher.verify(submitted, &entry.secret_hash).await? {
            tracing::info!(email = %masked, event = "otp_mismatch", "Submitted code did not match");
            return Ok(ConsumeOutcome::Invalid);
        }

        // The hash is slow enough for the window to close while it runs
        if entry.is_expired_at(Utc::now()) {
            return self.discard_expired(&entry).await;
        }

        let removed = store_call(
            self.store_timeout,
            "delete_matching",
            self.store.delete_matching(&entry.email, &entry.secret_hash),
        )
        .await?;

        if removed {
            tracing::info!(email = %masked, event = "otp_consumed", "Passcode accepted");
            Ok(ConsumeOutcome::Success)
        } else {
            tracing::info!(
                email = %masked,
                event = "otp_consume_lost_race",
                "Passcode was consumed or replaced concurrently"
            );
            Ok(ConsumeOutcome::NotFound)
        }
    }

    async fn discard_expired(&self, entry: &OtpEntry) -> DomainResult<ConsumeOutcome> {
        store_call(
            self.store_timeout,
            "delete_matching",
            self.store.delete_matching(&entry.email, &entry.secret_hash),
        )
        .await?;

        tracing::info!(
            email = %mask_email(&entry.email),
            expired_at = %entry.expires_at,
            event = "otp_expired",
            "Discarded expired passcode"
        );
        Ok(ConsumeOutcome::Expired)
    }
}
