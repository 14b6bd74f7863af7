//! Traits for notification integration

use async_trait::async_trait;

/// Trait for outbound delivery of passcodes
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Deliver a message and return the provider's message id
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String>;
}
