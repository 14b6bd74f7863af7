//! Login code shape

use once_cell::sync::Lazy;
use regex::Regex;

/// Exactly six ASCII digits
pub static OTP_CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_code_regex() {
        assert!(OTP_CODE_REGEX.is_match("123456"));
        assert!(OTP_CODE_REGEX.is_match("000000"));

        assert!(!OTP_CODE_REGEX.is_match("abcdef"));
        assert!(!OTP_CODE_REGEX.is_match("12 456"));
        assert!(!OTP_CODE_REGEX.is_match("12345"));
        assert!(!OTP_CODE_REGEX.is_match("1234567"));
        assert!(!OTP_CODE_REGEX.is_match("１２３４５６"));
        assert!(!OTP_CODE_REGEX.is_match("123456\n"));
    }
}
