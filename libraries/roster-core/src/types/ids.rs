/// ID types for directory entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a new user ID
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Identifiers are assigned from 1 upwards
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&UserId::new(42)).unwrap();
        assert_eq!(json, "42");

        let id: UserId = serde_json::from_str("7").unwrap();
        assert_eq!(id, UserId::new(7));
    }

    #[test]
    fn positivity() {
        assert!(UserId::new(1).is_positive());
        assert!(!UserId::new(0).is_positive());
        assert!(!UserId::new(-3).is_positive());
    }
}
