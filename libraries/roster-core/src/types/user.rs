/// User domain type
use serde::{Deserialize, Serialize};

use super::UserId;

/// Directory entry for a single person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact address, compared case-insensitively
    pub email: String,

    /// Free-text classification such as "developer" or "devops"
    pub role: String,

    /// Seniority, informally 1-10
    pub level: i32,
}

impl User {
    /// Create a new user record
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        level: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            level,
        }
    }

    /// Case-insensitive email comparison
    pub fn has_email(&self, email: &str) -> bool {
        eq_ignore_case(&self.email, email)
    }

    /// Case-insensitive role comparison
    pub fn has_role(&self, role: &str) -> bool {
        eq_ignore_case(&self.role, role)
    }
}

// Unicode-aware so non-ASCII roles fold the same way as ASCII ones.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> User {
        User::new(1, "Ana Silva", "ana.silva@rumos.pt", "developer", 3)
    }

    #[test]
    fn email_match_ignores_case() {
        let user = ana();
        assert!(user.has_email("ANA.SILVA@RUMOS.PT"));
        assert!(user.has_email("Ana.Silva@Rumos.pt"));
        assert!(!user.has_email("ana.silva@rumos.com"));
    }

    #[test]
    fn role_match_is_exact_apart_from_case() {
        let user = ana();
        assert!(user.has_role("Developer"));
        assert!(!user.has_role("dev"));
        assert!(!user.has_role("developers"));
    }

    #[test]
    fn non_ascii_roles_fold() {
        let user = User::new(9, "Zé", "ze@rumos.pt", "Engenheiro Sénior", 7);
        assert!(user.has_role("ENGENHEIRO SÉNIOR"));
    }

    #[test]
    fn serializes_all_five_fields_by_name() {
        let value = serde_json::to_value(ana()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Ana Silva",
                "email": "ana.silva@rumos.pt",
                "role": "developer",
                "level": 3
            })
        );
    }
}
