//! Directory Query Service
//!
//! Stateless facade answering the read-only query shapes over a
//! [`DirectoryStore`]. Every result is an owned copy, so callers can mutate
//! what they get back without touching the store.

use crate::directory::DirectoryStore;
use crate::error::{DirectoryError, Result};
use crate::types::{User, UserId};

/// Read operations over a user directory
///
/// Only [`UserDirectory::get_by_id`] can fail. Searches report "no match"
/// as `None` or an empty `Vec`, never as an error.
pub trait UserDirectory: Send + Sync {
    /// Every user in store order
    fn list_all(&self) -> Vec<User>;

    /// The user with the given identifier
    ///
    /// Fails with [`DirectoryError::UserNotFound`] when no user matches.
    fn get_by_id(&self, id: UserId) -> Result<User>;

    /// First user whose email matches, ignoring case
    fn find_by_email(&self, email: &str) -> Option<User>;

    /// Users whose role matches, ignoring case, in store order
    fn find_by_role(&self, role: &str) -> Vec<User>;
}

/// Query service backed by an immutable [`DirectoryStore`]
#[derive(Debug, Clone, Default)]
pub struct DirectoryQueryService {
    store: DirectoryStore,
}

impl DirectoryQueryService {
    /// Create a query service over the given store
    pub fn new(store: DirectoryStore) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }
}

impl UserDirectory for DirectoryQueryService {
    fn list_all(&self) -> Vec<User> {
        self.store.records().to_vec()
    }

    fn get_by_id(&self, id: UserId) -> Result<User> {
        self.store
            .records()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(DirectoryError::UserNotFound(id))
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        self.store
            .records()
            .iter()
            .find(|u| u.has_email(email))
            .cloned()
    }

    fn find_by_role(&self, role: &str) -> Vec<User> {
        self.store
            .records()
            .iter()
            .filter(|u| u.has_role(role))
            .cloned()
            .collect()
    }
}
