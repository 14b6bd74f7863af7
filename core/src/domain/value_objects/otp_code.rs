//! Plaintext one-time passcode value object.

use rand::{rngs::OsRng, Rng};
use std::fmt;

/// Length of a passcode
pub const CODE_LENGTH: usize = 6;

/// Smallest issued code (no leading zero, so every code has six digits)
const CODE_MIN: u32 = 100_000;

/// Largest issued code
const CODE_MAX: u32 = 999_999;

/// A freshly issued plaintext passcode
///
/// Exists only between issuance and the outbound notification. `Debug` and
/// `Display` never print the digits, so the value cannot leak through logs
/// by accident; callers that really need the digits use [`OtpCode::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    /// Generates a uniformly random code in `[100000, 999999]` from the OS CSPRNG
    pub fn generate() -> Self {
        let value = OsRng.gen_range(CODE_MIN..=CODE_MAX);
        Self(value.to_string())
    }

    /// The plaintext digits, for hashing and for the notification body only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Checks that a submitted value has the shape of a passcode
    ///
    /// Exactly [`CODE_LENGTH`] ASCII digits. Shape only; whether the value
    /// could have been issued is decided by the hash comparison.
    pub fn is_well_formed(candidate: &str) -> bool {
        candidate.len() == CODE_LENGTH && candidate.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpCode(******)")
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("******")
    }
}
