//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of the core repository traits
//! using SQLx for database operations.

pub mod otp_repository_impl;
pub mod user_repository_impl;

pub use otp_repository_impl::MySqlOtpRepository;
pub use user_repository_impl::MySqlUserRepository;

use lv_core::errors::DomainError;

/// Classify a SQLx error for the domain
///
/// Anything short of a decoding problem means the store could not serve
/// the call.
pub(crate) fn map_sqlx_error(operation: &str, error: sqlx::Error) -> DomainError {
    match error {
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) | sqlx::Error::ColumnNotFound(_) => {
            DomainError::internal(format!("{}: {}", operation, error))
        }
        other => DomainError::store_unavailable(format!("{}: {}", operation, other)),
    }
}
