//! In-memory implementation of UserRepository for development and testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::UserRecord;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// In-memory credential store
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
    should_fail: Arc<AtomicBool>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-seeded with accounts for the given emails
    pub fn with_emails<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let users = emails
            .into_iter()
            .map(|email| {
                let user = UserRecord::new(email);
                (user.email.clone(), user)
            })
            .collect();
        Self {
            users: Arc::new(RwLock::new(users)),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Register an account
    pub async fn insert(&self, user: UserRecord) {
        self.users.write().await.insert(user.email.clone(), user);
    }

    /// Make every subsequent call fail as if the store were unreachable
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::store_unavailable("in-memory user store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
        self.check_available()?;
        Ok(self.users.read().await.get(email).cloned())
    }
}
