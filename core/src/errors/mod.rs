//! Domain-specific error types and error handling.

use thiserror::Error;


/// Core domain errors
///
/// The `message` carried by the infrastructure variants is log-only detail
/// and never part of `Display`.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("No account is registered for this email")]
    UnknownEmail,

    #[error("Durable store unavailable")]
    StoreUnavailable { message: String },

    #[error("Notification delivery failed")]
    NotifyFailed { message: String },

    #[error("Internal error")]
    Internal { message: String },
}

impl DomainError {
    /// Build a `StoreUnavailable` error from any displayable cause
    pub fn store_unavailable(cause: impl std::fmt::Display) -> Self {
        DomainError::StoreUnavailable {
            message: cause.to_string(),
        }
    }

    /// Build a `NotifyFailed` error from any displayable cause
    pub fn notify_failed(cause: impl std::fmt::Display) -> Self {
        DomainError::NotifyFailed {
            message: cause.to_string(),
        }
    }

    /// Build an `Internal` error from any displayable cause
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        DomainError::Internal {
            message: cause.to_string(),
        }
    }

    /// Stable classification used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "validation",
            DomainError::UnknownEmail => "unknown_email",
            DomainError::StoreUnavailable { .. } => "store_unavailable",
            DomainError::NotifyFailed { .. } => "notify_failed",
            DomainError::Internal { .. } => "internal",
        }
    }

    /// Internal detail for logging, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            DomainError::Validation { message }
            | DomainError::StoreUnavailable { message }
            | DomainError::NotifyFailed { message }
            | DomainError::Internal { message } => Some(message),
            DomainError::UnknownEmail => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
