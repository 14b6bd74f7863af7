//! Mail Service Module
//!
//! Outbound email used to deliver login passcodes.
//!
//! - **EmailService trait**: common interface for all providers
//! - **Log provider**: writes messages to the console for development
//! - **HTTP provider**: posts messages to a transactional email API
//! - **MailNotifier**: bridges a provider to the core notifier trait

pub mod email_service;
pub mod http_mail;
pub mod log_mail;
pub mod notifier_adapter;

pub use email_service::EmailService;
pub use http_mail::HttpMailService;
pub use log_mail::LogMailService;
pub use notifier_adapter::MailNotifier;

use lv_shared::config::{MailConfig, MailProvider};

use crate::InfrastructureError;


/// Create a mail service based on configuration
///
/// # Arguments
///
/// * `config` - Mail configuration containing provider settings
/// * `console_output` - Print log-provider messages to stdout
///
/// # Errors
///
/// * `InfrastructureError::Config` - The HTTP provider is selected without an API URL
pub fn create_mail_service(
    config: &MailConfig,
    console_output: bool,
) -> Result<Box<dyn EmailService>, InfrastructureError> {
    match config.provider {
        MailProvider::Log => Ok(Box::new(LogMailService::new(console_output))),
        MailProvider::Http => Ok(Box::new(HttpMailService::from_config(config)?)),
    }
}
