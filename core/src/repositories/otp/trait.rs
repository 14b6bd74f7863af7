//! OTP repository trait: the durable key-value store behind the OTP ledger.
//!
//! Rows are keyed by email and hold at most one pending code each. The
//! ledger builds its per-key atomic transitions from two primitives:
//! a single-statement upsert for issuance, and a delete that only fires
//! when the stored hash still matches the one the caller read.

use async_trait::async_trait;

use crate::domain::entities::otp_entry::OtpEntry;
use crate::errors::DomainError;

/// Durable storage for pending passcodes
///
/// Every method must be atomic with respect to concurrent calls on the same
/// email. Connectivity failures map to [`DomainError::StoreUnavailable`].
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Insert the entry, replacing any existing entry for the same email
    ///
    /// Must be a single atomic unit: no observer may ever see two live
    /// entries for one email, nor an email with its old entry deleted and
    /// the new one not yet written.
    async fn upsert(&self, entry: &OtpEntry) -> Result<(), DomainError>;

    /// Fetch the current entry for an email, expired or not
    async fn find_by_email(&self, email: &str) -> Result<Option<OtpEntry>, DomainError>;

    /// Delete the entry for `email` only if its hash is still `secret_hash`
    ///
    /// # Returns
    /// * `Ok(true)` - This call removed the entry
    /// * `Ok(false)` - The entry was already gone or had been replaced
    async fn delete_matching(&self, email: &str, secret_hash: &str) -> Result<bool, DomainError>;
}
