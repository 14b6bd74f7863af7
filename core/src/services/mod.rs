//! Business services containing domain logic and use cases.

pub mod otp;

// Re-export commonly used types
pub use otp::{
    ConsumeOutcome, IssuedOtp, NotifierTrait, OtpEmail, OtpHasher, OtpLedger, OtpService,
    OtpServiceConfig, SendCodeResult, VerifyCodeResult,
};
