//! Types for OTP service results

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::OtpCode;

/// A code freshly written to the ledger
#[derive(Debug, Clone)]
pub struct IssuedOtp {
    /// The plaintext code, for one outbound notification only
    pub code: OtpCode,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Result of consuming a submitted code against the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeOutcome {
    /// The code matched and this call removed the entry
    Success,
    /// The entry was past its window and has been removed
    Expired,
    /// No entry for the email, or another caller consumed it first
    NotFound,
    /// The code did not match; the entry is kept
    Invalid,
}

/// Result of sending a passcode
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// The notifier's message id
    pub message_id: String,
    /// When the issued code expires
    pub expires_at: DateTime<Utc>,
}

/// Result of verifying a passcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyCodeResult {
    LoggedIn,
    Expired,
    Invalid,
    NotFound,
}

impl From<ConsumeOutcome> for VerifyCodeResult {
    fn from(outcome: ConsumeOutcome) -> Self {
        match outcome {
            ConsumeOutcome::Success => VerifyCodeResult::LoggedIn,
            ConsumeOutcome::Expired => VerifyCodeResult::Expired,
            ConsumeOutcome::NotFound => VerifyCodeResult::NotFound,
            ConsumeOutcome::Invalid => VerifyCodeResult::Invalid,
        }
    }
}

impl VerifyCodeResult {
    /// Stable name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyCodeResult::LoggedIn => "logged_in",
            VerifyCodeResult::Expired => "expired",
            VerifyCodeResult::Invalid => "invalid",
            VerifyCodeResult::NotFound => "not_found",
        }
    }
}
