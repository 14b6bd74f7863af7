//! User repository trait defining the credential store interface.
//!
//! The login flow only needs to know whether an account exists for an
//! email; account creation and updates belong to other parts of the system.

use async_trait::async_trait;

use crate::domain::entities::user::UserRecord;
use crate::errors::DomainError;

/// Read-only view of registered accounts keyed by email
///
/// Implementations map connectivity failures and timeouts to
/// [`DomainError::StoreUnavailable`].
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use lv_core::repositories::UserRepository;
/// use lv_core::domain::entities::user::UserRecord;
/// use lv_core::errors::DomainError;
///
/// struct StaticUsers;
///
/// #[async_trait]
/// impl UserRepository for StaticUsers {
///     async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
///         Ok((email == "u@test.com").then(|| UserRecord::new(email)))
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the account registered under an email
    ///
    /// # Returns
    /// * `Ok(Some(UserRecord))` - Account found
    /// * `Ok(None)` - No account with this email
    /// * `Err(DomainError)` - The store could not be reached
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError>;

    /// Check if an account exists for an email
    ///
    /// The default goes through [`find_by_email`](Self::find_by_email);
    /// SQL implementations override it with a cheaper existence query.
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
