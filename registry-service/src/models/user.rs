use crate::utils::formatting::title_case;
use crate::utils::validation::is_valid_email;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One user's id/name/email triple.
///
/// Ids are assigned by the caller and are not required to be unique. The
/// email is stored as given; use [`UserRecord::has_valid_email`] to check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    id: u64,
    name: String,
    email: String,
}

impl UserRecord {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Name with the first letter of every word uppercased
    pub fn display_name(&self) -> String {
        title_case(&self.name)
    }

    pub fn has_valid_email(&self) -> bool {
        is_valid_email(&self.email)
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> UserRecord {
        UserRecord::new(1, "john doe", "john@example.com")
    }

    #[test]
    fn test_accessors() {
        let user = john();
        assert_eq!(user.id(), 1);
        assert_eq!(user.name(), "john doe");
        assert_eq!(user.email(), "john@example.com");
    }

    #[test]
    fn test_display_name_title_cases() {
        assert_eq!(john().display_name(), "John Doe");
    }

    #[test]
    fn test_display_summary() {
        assert_eq!(john().to_string(), "john doe (john@example.com)");
    }

    #[test]
    fn test_email_not_checked_on_construction() {
        let user = UserRecord::new(2, "bob", "not-an-email");
        assert_eq!(user.email(), "not-an-email");
        assert!(!user.has_valid_email());
        assert!(john().has_valid_email());
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(john()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "john doe",
                "email": "john@example.com"
            })
        );

        let back: UserRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, john());
    }
}
