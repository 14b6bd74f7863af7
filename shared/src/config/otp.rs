//! One-time passcode lifecycle configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::env_or;

/// Default bcrypt work factor (matches `bcrypt::DEFAULT_COST`)
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Default validity window of an issued code
pub const DEFAULT_VALIDITY_MINUTES: i64 = 5;

/// OTP issuance and verification settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes between issuance and expiry of a code
    pub validity_minutes: i64,

    /// bcrypt work factor used to hash codes
    pub bcrypt_cost: u32,

    /// Upper bound for a single durable-store call, in milliseconds
    pub store_timeout_ms: u64,

    /// Upper bound for a single notifier call, in milliseconds
    pub notify_timeout_ms: u64,

    /// Trim and lowercase emails before they reach the stores
    pub normalize_email: bool,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            validity_minutes: DEFAULT_VALIDITY_MINUTES,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            store_timeout_ms: 3_000,
            notify_timeout_ms: 10_000,
            normalize_email: true,
        }
    }
}

impl OtpConfig {
    /// Create from `OTP_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            validity_minutes: env_or("OTP_VALIDITY_MINUTES", defaults.validity_minutes).max(1),
            bcrypt_cost: env_or("OTP_BCRYPT_COST", defaults.bcrypt_cost),
            store_timeout_ms: env_or("OTP_STORE_TIMEOUT_MS", defaults.store_timeout_ms),
            notify_timeout_ms: env_or("OTP_NOTIFY_TIMEOUT_MS", defaults.notify_timeout_ms),
            normalize_email: env_or("OTP_NORMALIZE_EMAIL", defaults.normalize_email),
        }
    }

    /// Validity window as a chrono duration
    pub fn validity(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.validity_minutes)
    }

    /// Store call budget
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    /// Notifier call budget
    pub fn notify_timeout(&self) -> Duration {
        Duration::from_millis(self.notify_timeout_ms)
    }

    /// Set the bcrypt work factor
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Set the validity window in minutes
    pub fn with_validity_minutes(mut self, minutes: i64) -> Self {
        self.validity_minutes = minutes;
        self
    }

    /// Set both call budgets at once
    pub fn with_timeouts(mut self, store: Duration, notify: Duration) -> Self {
        self.store_timeout_ms = store.as_millis() as u64;
        self.notify_timeout_ms = notify.as_millis() as u64;
        self
    }
}
