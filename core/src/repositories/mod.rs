//! Repository interfaces for the durable stores the login flow reads and writes.
//!
//! - `user` - the credential store (email → account), read-only here
//! - `otp` - the OTP ledger's durable key-value store (email → pending code)

pub mod otp;
pub mod user;

pub use otp::{InMemoryOtpRepository, OtpRepository};
pub use user::{InMemoryUserRepository, UserRepository};
