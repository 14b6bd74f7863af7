//! One-time passcode login module
//!
//! This module provides the email OTP workflow:
//! - Issuing a random 6-digit code and persisting only its bcrypt hash
//! - Delivering the code through a notifier
//! - Single-use, time-limited verification
//! - Per-call time budgets on the store and the notifier

mod config;
mod deadline;
mod email;
mod hasher;
mod ledger;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use email::OtpEmail;
pub use hasher::{OtpHasher, MAX_COST, MIN_COST};
pub use ledger::OtpLedger;
pub use service::OtpService;
pub use traits::NotifierTrait;
pub use types::{ConsumeOutcome, IssuedOtp, SendCodeResult, VerifyCodeResult};
