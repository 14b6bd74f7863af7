//! Common utility functions

pub mod code;
pub mod email;

pub use code::OTP_CODE_REGEX;
pub use email::{is_valid_email, mask_email, normalize_email, EMAIL_REGEX};
