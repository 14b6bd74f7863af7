//! Authentication route handlers
//!
//! - Requesting a login code by email
//! - Verifying a login code

pub mod request_otp;
pub mod verify_otp;

use std::sync::Arc;

use lv_core::repositories::{OtpRepository, UserRepository};
use lv_core::services::otp::{NotifierTrait, OtpService};

/// Application state that holds shared services
pub struct AppState<U, O, N>
where
    U: UserRepository,
    O: OtpRepository,
    N: NotifierTrait,
{
    pub otp_service: Arc<OtpService<U, O, N>>,
}

impl<U, O, N> AppState<U, O, N>
where
    U: UserRepository,
    O: OtpRepository,
    N: NotifierTrait,
{
    pub fn new(otp_service: Arc<OtpService<U, O, N>>) -> Self {
        Self { otp_service }
    }
}
