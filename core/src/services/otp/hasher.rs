//! bcrypt hashing of passcodes

use crate::domain::value_objects::OtpCode;
use crate::errors::{DomainError, DomainResult};

/// Lowest work factor bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Salted adaptive hashing for passcodes
///
/// Hashing and verification run on the blocking pool so a slow work factor
/// never stalls the async workers.
#[derive(Debug, Clone, Copy)]
pub struct OtpHasher {
    cost: u32,
}

impl OtpHasher {
    /// Create a hasher; `cost` is clamped to `MIN_COST..=MAX_COST`
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_COST, MAX_COST),
        }
    }

    /// Effective work factor
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a freshly generated code
    pub async fn hash(&self, code: &OtpCode) -> DomainResult<String> {
        let plain = code.expose().to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .map_err(DomainError::internal)?
            .map_err(DomainError::internal)
    }

    /// Compare a submitted code with a stored hash
    ///
    /// A stored hash bcrypt cannot parse is an internal error, never a match.
    pub async fn verify(&self, submitted: &str, secret_hash: &str) -> DomainResult<bool> {
        let submitted = submitted.to_owned();
        let secret_hash = secret_hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(submitted, &secret_hash))
            .await
            .map_err(DomainError::internal)?
            .map_err(DomainError::internal)
    }
}

impl Default for OtpHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
