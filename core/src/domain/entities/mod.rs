//! Domain entities representing core business objects.

pub mod otp_entry;
pub mod user;


// Re-export commonly used types
pub use otp_entry::{OtpEntry, DEFAULT_EXPIRATION_MINUTES};
pub use user::UserRecord;
