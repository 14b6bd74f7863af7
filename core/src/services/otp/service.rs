//! Main OTP login service implementation

use lv_shared::utils::{mask_email, normalize_email};
use std::sync::Arc;

use crate::errors::{DomainError, DomainResult};
use crate::repositories::otp::OtpRepository;
use crate::repositories::user::UserRepository;

use super::config::OtpServiceConfig;
use super::deadline::{notify_call, store_call};
use super::email::OtpEmail;
use super::ledger::OtpLedger;
use super::traits::NotifierTrait;
use super::types::{SendCodeResult, VerifyCodeResult};

/// Email one-time passcode login
pub struct OtpService<U: UserRepository, O: OtpRepository, N: NotifierTrait> {
    /// Registered users, used to gate issuance
    users: Arc<U>,
    /// Pending passcodes
    ledger: OtpLedger<O>,
    /// Outbound delivery
    notifier: Arc<N>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<U: UserRepository, O: OtpRepository, N: NotifierTrait> OtpService<U, O, N> {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `users` - User repository implementation
    /// * `otp_store` - Durable OTP store implementation
    /// * `notifier` - Notifier implementation
    /// * `config` - Service configuration
    pub fn new(users: Arc<U>, otp_store: Arc<O>, notifier: Arc<N>, config: OtpServiceConfig) -> Self {
        let ledger = OtpLedger::new(otp_store, &config);
        Self {
            users,
            ledger,
            notifier,
            config,
        }
    }

    /// Send a login code to a registered email
    ///
    /// This method:
    /// 1. Checks that the email belongs to a user
    /// 2. Issues a new code, replacing any pending one
    /// 3. Delivers the code through the notifier
    ///
    /// A delivery failure leaves the issued entry in place; the user can
    /// simply ask again.
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - The code was stored and handed to the notifier
    /// * `Err(DomainError::UnknownEmail)` - No user has this email; nothing was stored
    /// * `Err(DomainError::StoreUnavailable)` - A store call failed or timed out
    /// * `Err(DomainError::NotifyFailed)` - Delivery failed or timed out
    pub async fn request_otp(&self, email: &str) -> DomainResult<SendCodeResult> {
        let email = self.canonical(email);
        let masked = mask_email(&email);

        let known = store_call(
            self.config.store_timeout,
            "exists_by_email",
            self.users.exists_by_email(&email),
        )
        .await
        .map_err(|e| self.log_failure(&masked, "otp_request_failed", e))?;

        if !known {
            tracing::info!(
                email = %masked,
                event = "otp_unknown_email",
                "Passcode requested for unregistered email"
            );
            return Err(DomainError::UnknownEmail);
        }

        let issued = self
            .ledger
            .issue(&email)
            .await
            .map_err(|e| self.log_failure(&masked, "otp_request_failed", e))?;

        let message = OtpEmail::render(&issued.code, self.ledger.validity());
        let message_id = notify_call(
            self.config.notify_timeout,
            self.notifier.send(&email, &message.subject, &message.body),
        )
        .await
        .map_err(|e| self.log_failure(&masked, "otp_notify_failed", e))?;

        tracing::info!(
            email = %masked,
            message_id = %message_id,
            event = "otp_sent",
            "Passcode delivered to notifier"
        );

        Ok(SendCodeResult {
            message_id,
            expires_at: issued.expires_at,
        })
    }

    /// Verify a submitted login code
    ///
    /// Success consumes the code. No session or token is created here.
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyCodeResult)` - The outcome for the submitted code
    /// * `Err(DomainError::StoreUnavailable)` - A store call failed or timed out
    pub async fn verify_otp(&self, email: &str, code: &str) -> DomainResult<VerifyCodeResult> {
        let email = self.canonical(email);
        let masked = mask_email(&email);

        let outcome = self
            .ledger
            .consume(&email, code.trim())
            .await
            .map_err(|e| self.log_failure(&masked, "otp_verify_failed", e))?;

        let result = VerifyCodeResult::from(outcome);
        tracing::info!(
            email = %masked,
            outcome = result.as_str(),
            event = "otp_verified",
            "Passcode verification finished"
        );
        Ok(result)
    }

    fn canonical(&self, email: &str) -> String {
        if self.config.normalize_email {
            normalize_email(email)
        } else {
            email.to_string()
        }
    }

    fn log_failure(&self, masked: &str, event: &'static str, error: DomainError) -> DomainError {
        tracing::error!(
            email = %masked,
            error_kind = error.kind(),
            detail = error.detail().unwrap_or_default(),
            event = event,
            "Passcode operation failed"
        );
        error
    }
}
