use serde::{Deserialize, Serialize};
use validator::Validate;

use lv_shared::utils::{EMAIL_REGEX, OTP_CODE_REGEX};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestOtpRequest {
    /// Address of a registered account
    #[validate(regex = "EMAIL_REGEX", length(max = 254))]
    pub email: String,
}

impl RequestOtpRequest {
    /// Drop surrounding whitespace before validation
    pub fn trimmed(self) -> Self {
        Self {
            email: self.email.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    /// Address the code was sent to
    #[validate(regex = "EMAIL_REGEX", length(max = 254))]
    pub email: String,

    /// 6-digit login code
    #[validate(regex = "OTP_CODE_REGEX")]
    pub code: String,
}

impl VerifyOtpRequest {
    /// Drop surrounding whitespace before validation
    pub fn trimmed(self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            code: self.code.trim().to_string(),
        }
    }
}
