//! User record as seen by the login flow.

use serde::{Deserialize, Serialize};

/// A registered account, identified by its email address
///
/// The login flow only reads these; account management lives elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique email address of the account
    pub email: String,
}

impl UserRecord {
    /// Creates a user record for an email address
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}
