//! Value objects - immutable domain concepts

pub mod otp_code;

pub use otp_code::{OtpCode, CODE_LENGTH};
