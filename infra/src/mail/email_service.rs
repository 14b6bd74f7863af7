//! Email Service Interface

use async_trait::async_trait;

use crate::InfrastructureError;

/// Email service trait for sending messages
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send a plain-text email
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Identifier assigned to the message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &str;
}
