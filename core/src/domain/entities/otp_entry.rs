//! Pending one-time passcode entity for email-based login.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default expiration time for issued codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// The single live passcode for an email address
///
/// Only the bcrypt hash of the code is held here; the plaintext never
/// leaves the issuing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    /// Email the code was issued for (primary key of the ledger)
    pub email: String,

    /// Salted adaptive hash of the 6-digit code
    pub secret_hash: String,

    /// Instant after which the code must not be compared
    pub expires_at: DateTime<Utc>,

    /// Instant the code was issued
    pub created_at: DateTime<Utc>,
}

impl OtpEntry {
    /// Creates an entry issued at `now` that lives for `validity`
    ///
    /// # Arguments
    ///
    /// * `email` - The address the code is sent to
    /// * `secret_hash` - Hash of the plaintext code
    /// * `now` - Issuance instant
    /// * `validity` - Length of the validity window
    pub fn issue(
        email: impl Into<String>,
        secret_hash: impl Into<String>,
        now: DateTime<Utc>,
        validity: Duration,
    ) -> Self {
        Self {
            email: email.into(),
            secret_hash: secret_hash.into(),
            expires_at: now + validity,
            created_at: now,
        }
    }

    /// Checks whether the entry is past its validity window at `now`
    ///
    /// The entry is still valid at exactly `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Checks whether the entry has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Time left before expiry, zero once expired
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}
