//! Mock notifiers for testing the OTP service

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::value_objects::CODE_LENGTH;
use crate::services::otp::{NotifierTrait, OtpServiceConfig};

/// A message the mock notifier accepted
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl SentMessage {
    /// Pull the six-digit code out of the rendered body
    pub fn code(&self) -> String {
        self.body
            .split(|c: char| !c.is_ascii_digit())
            .find(|chunk| chunk.len() == CODE_LENGTH)
            .expect("body contains a code")
            .to_string()
    }
}

/// Mock notifier that records messages
pub struct MockNotifier {
    pub sent: Mutex<Vec<SentMessage>>,
    pub should_fail: bool,
    pub delay: Option<Duration>,
    counter: AtomicUsize,
}

impl MockNotifier {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            should_fail,
            delay: None,
            counter: AtomicUsize::new(0),
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(false)
        }
    }

    pub fn last_code_for(&self, to: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|m| m.to == to)
            .map(SentMessage::code)
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl NotifierTrait for MockNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.should_fail {
            return Err("Mail provider error".to_string());
        }
        self.sent.lock().unwrap().push(SentMessage {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("mock-msg-{}", n))
    }
}

/// Fast configuration for tests
pub fn test_config() -> OtpServiceConfig {
    OtpServiceConfig {
        bcrypt_cost: 4,
        store_timeout: Duration::from_millis(500),
        notify_timeout: Duration::from_millis(500),
        ..OtpServiceConfig::default()
    }
}
