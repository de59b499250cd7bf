//! Directory Store
//!
//! Immutable backing collection of user records. Records are validated once
//! when the store is built and are never added, removed or modified after
//! that; every accessor hands out shared references or clones.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{DirectoryError, Result};
use crate::types::User;

/// Pre-seeded, read-only collection of users
///
/// Cloning is cheap: clones share the same backing slice.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    users: Arc<[User]>,
}

impl DirectoryStore {
    /// Build a store from the reference seed data
    pub fn seeded() -> Self {
        Self {
            users: seed_users().into(),
        }
    }

    /// Build a store from caller-supplied records, preserving their order
    ///
    /// Identifiers must be positive and unique, and names non-empty.
    pub fn from_records(records: Vec<User>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());

        for user in &records {
            if !user.id.is_positive() {
                return Err(DirectoryError::invalid_record(format!(
                    "id must be positive, got {}",
                    user.id
                )));
            }
            if user.name.trim().is_empty() {
                return Err(DirectoryError::invalid_record(format!(
                    "user {} has an empty name",
                    user.id
                )));
            }
            if !seen.insert(user.id) {
                return Err(DirectoryError::DuplicateId(user.id));
            }
        }

        Ok(Self {
            users: records.into(),
        })
    }

    /// All records in insertion order
    pub fn records(&self) -> &[User] {
        &self.users
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Ana Silva", "ana.silva@rumos.pt", "developer", 3),
        User::new(2, "Bruno Santos", "bruno.santos@rumos.pt", "devops", 5),
        User::new(3, "Carla Ferreira", "carla.ferreira@rumos.pt", "tester", 2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    #[test]
    fn seed_has_three_records_in_order() {
        let store = DirectoryStore::seeded();
        let ids: Vec<i64> = store.records().iter().map(|u| u.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn seed_passes_validation() {
        let store = DirectoryStore::from_records(seed_users()).unwrap();
        assert_eq!(store.records(), DirectoryStore::seeded().records());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let records = vec![
            User::new(1, "One", "one@example.com", "developer", 1),
            User::new(1, "Other", "other@example.com", "tester", 1),
        ];
        let err = DirectoryStore::from_records(records).unwrap_err();
        assert_eq!(err, DirectoryError::DuplicateId(UserId::new(1)));
    }

    #[test]
    fn non_positive_ids_are_rejected() {
        let records = vec![User::new(0, "Zero", "zero@example.com", "developer", 1)];
        let err = DirectoryStore::from_records(records).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidRecord(_)));
    }

    #[test]
    fn blank_names_are_rejected() {
        let records = vec![User::new(4, "   ", "blank@example.com", "developer", 1)];
        let err = DirectoryStore::from_records(records).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidRecord(_)));
    }

    #[test]
    fn empty_store_is_allowed() {
        let store = DirectoryStore::from_records(Vec::new()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn clones_share_backing_records() {
        let store = DirectoryStore::seeded();
        let clone = store.clone();
        assert!(std::ptr::eq(store.records(), clone.records()));
    }
}
