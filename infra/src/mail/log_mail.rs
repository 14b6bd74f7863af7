//! Log-only mail provider for development and testing

use async_trait::async_trait;
use lv_shared::utils::mask_email;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use super::email_service::EmailService;
use crate::InfrastructureError;

/// Mail service that prints messages instead of delivering them
///
/// The structured log line never carries the body. Console output, which
/// does include it, is meant for local development only.
#[derive(Clone)]
pub struct LogMailService {
    message_count: Arc<AtomicU64>,
    console_output: bool,
}

impl LogMailService {
    /// Create a new log mail service
    pub fn new(console_output: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for LogMailService {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl EmailService for LogMailService {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError> {
        let message_id = format!("log_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("LOG MAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", to);
            println!("Subject: {}", subject);
            println!("Message ID: {}", message_id);
            println!("{}", body);
            println!("{}\n", "=".repeat(60));
        }

        tracing::info!(
            target: "mail_service",
            provider = "log",
            to = %mask_email(to),
            message_id = %message_id,
            body_length = body.len(),
            "Email sent (log provider)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Log"
    }
}
