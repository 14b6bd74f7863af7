//! Mail Notifier Adapter
//!
//! Implements the core `NotifierTrait` on top of any [`EmailService`],
//! bridging the infrastructure providers with the core domain trait.

use async_trait::async_trait;
use lv_core::services::otp::NotifierTrait;

use super::email_service::EmailService;

/// Adapter that implements the core NotifierTrait for a mail provider
pub struct MailNotifier {
    inner: Box<dyn EmailService>,
}

impl MailNotifier {
    /// Wrap a mail provider
    pub fn new(inner: Box<dyn EmailService>) -> Self {
        Self { inner }
    }

    /// Name of the wrapped provider
    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl NotifierTrait for MailNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        self.inner
            .send_email(to, subject, body)
            .await
            .map_err(|e| e.to_string())
    }
}
