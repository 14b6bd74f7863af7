//! # LawVriksh Core
//!
//! Core business logic and domain layer for the LawVriksh backend.
//! This crate contains the one-time passcode lifecycle: domain entities,
//! repository interfaces, the OTP ledger and service, and error types.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::{OtpCode, OtpEntry, UserRecord, CODE_LENGTH};
pub use errors::{DomainError, DomainResult};
pub use repositories::{InMemoryOtpRepository, InMemoryUserRepository, OtpRepository, UserRepository};
pub use services::{
    ConsumeOutcome, NotifierTrait, OtpLedger, OtpService, OtpServiceConfig, SendCodeResult,
    VerifyCodeResult,
};
