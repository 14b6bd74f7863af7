//! Configuration for the OTP service

use lv_shared::OtpConfig;
use std::time::Duration;

/// Runtime settings for the ledger and the service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// How long an issued code stays valid
    pub validity: chrono::Duration,
    /// bcrypt work factor (clamped by the hasher)
    pub bcrypt_cost: u32,
    /// Budget for a single store call
    pub store_timeout: Duration,
    /// Budget for a single notifier call
    pub notify_timeout: Duration,
    /// Trim and lowercase emails on entry
    pub normalize_email: bool,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self::from(&OtpConfig::default())
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            validity: config.validity(),
            bcrypt_cost: config.bcrypt_cost,
            store_timeout: config.store_timeout(),
            notify_timeout: config.notify_timeout(),
            normalize_email: config.normalize_email,
        }
    }
}
