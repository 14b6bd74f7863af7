//! Outbound mail configuration

use serde::{Deserialize, Serialize};

/// Supported mail providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Write messages to the log instead of delivering them
    Log,
    /// POST messages to an HTTP email API
    Http,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "log" | "mock" => Ok(MailProvider::Log),
            "http" | "api" => Ok(MailProvider::Http),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// Mail delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Which provider delivers messages
    pub provider: MailProvider,

    /// Endpoint of the HTTP email API
    #[serde(default)]
    pub api_url: Option<String>,

    /// Bearer token for the HTTP email API
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Sender address
    pub from_address: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Log,
            api_url: None,
            api_key: None,
            from_address: String::from("no-reply@lawvriksh.com"),
        }
    }
}

impl MailConfig {
    /// Create from `MAIL_PROVIDER`, `MAIL_API_URL`, `MAIL_API_KEY` and `MAIL_FROM`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("MAIL_PROVIDER")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.provider),
            api_url: std::env::var("MAIL_API_URL").ok().filter(|v| !v.is_empty()),
            api_key: std::env::var("MAIL_API_KEY").ok().filter(|v| !v.is_empty()),
            from_address: std::env::var("MAIL_FROM").unwrap_or(defaults.from_address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert_eq!("log".parse::<MailProvider>().unwrap(), MailProvider::Log);
        assert_eq!("HTTP".parse::<MailProvider>().unwrap(), MailProvider::Http);
        assert!("smtp".parse::<MailProvider>().is_err());
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = MailConfig {
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
