//! HTTP email API provider
//!
//! Posts `{from, to, subject, text}` as JSON with a bearer token and reads
//! the provider's message id from the `id` field of the response.

use async_trait::async_trait;
use lv_shared::config::MailConfig;
use lv_shared::utils::mask_email;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use super::email_service::EmailService;
use crate::InfrastructureError;

/// Per-request timeout of the HTTP client
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

/// Mail service backed by an HTTP email API
pub struct HttpMailService {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    from_address: String,
}

impl HttpMailService {
    /// Create a service for `endpoint`
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        from_address: impl Into<String>,
    ) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
            from_address: from_address.into(),
        })
    }

    /// Create from mail configuration; `api_url` is required
    pub fn from_config(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let endpoint = config.api_url.clone().ok_or_else(|| {
            InfrastructureError::Config("MAIL_API_URL must be set for the http mail provider".to_string())
        })?;

        tracing::info!(endpoint = %endpoint, "HTTP mail service initialized");
        Self::new(endpoint, config.api_key.clone(), config.from_address.clone())
    }
}

#[async_trait]
impl EmailService for HttpMailService {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError> {
        let payload = SendRequest {
            from: &self.from_address,
            to,
            subject,
            text: body,
        };

        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(to = %mask_email(to), error = %e, "Mail provider request failed");
            InfrastructureError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                to = %mask_email(to),
                status = status.as_u16(),
                "Mail provider rejected message"
            );
            return Err(InfrastructureError::Mail(format!(
                "provider returned status {}",
                status.as_u16()
            )));
        }

        // Some providers answer 202 with an empty body
        let message_id = response
            .json::<SendResponse>()
            .await
            .ok()
            .and_then(|r| r.id)
            .unwrap_or_else(|| format!("http_{}", Uuid::new_v4()));

        tracing::info!(
            target: "mail_service",
            provider = "http",
            to = %mask_email(to),
            message_id = %message_id,
            "Email accepted by provider"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "HTTP"
    }
}
