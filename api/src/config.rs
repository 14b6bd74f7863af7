//! Startup configuration

use anyhow::{bail, Context};
use lv_shared::config::{AppConfig, MailProvider, StorageBackend};
use lv_shared::utils::{is_valid_email, mask_email, normalize_email};

/// Emails registered in the in-memory user store, from `MEMORY_SEED_EMAILS`
pub const SEED_EMAILS_VAR: &str = "MEMORY_SEED_EMAILS";

/// Load `.env` if present, then read the configuration from the environment
pub fn load() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    validate(&config)?;
    Ok(config)
}

/// Reject combinations the server cannot start with
pub fn validate(config: &AppConfig) -> anyhow::Result<()> {
    if config.mail.provider == MailProvider::Http && config.mail.api_url.is_none() {
        bail!("MAIL_API_URL must be set when MAIL_PROVIDER=http");
    }
    if config.storage == StorageBackend::Memory && config.environment.is_production() {
        bail!("STORAGE_BACKEND=memory is not allowed in production");
    }
    if config.otp.validity_minutes < 1 {
        bail!("OTP_VALIDITY_MINUTES must be at least 1");
    }
    if config.database.url.is_empty() {
        bail!("DATABASE_URL must not be empty");
    }
    config
        .server
        .bind_address()
        .parse::<std::net::SocketAddr>()
        .with_context(|| format!("invalid bind address {}", config.server.bind_address()))
        .map(|_| ())
}

/// Parse a comma-separated list of seed emails, skipping malformed entries
pub fn parse_seed_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_email)
        .filter(|email| !email.is_empty())
        .filter(|email| {
            let valid = is_valid_email(email);
            if !valid {
                tracing::warn!(email = %mask_email(email), "Skipping malformed seed email");
            }
            valid
        })
        .collect()
}

/// Seed emails for the in-memory backend
pub fn seed_emails_from_env() -> Vec<String> {
    std::env::var(SEED_EMAILS_VAR)
        .map(|raw| parse_seed_emails(&raw))
        .unwrap_or_default()
}
