//! User model
//!
//! Request and response shapes for the `/users` resource, plus the
//! selection-list option a created user becomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A user as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
}

impl User {
    /// Label used in user selection lists
    pub fn label(&self) -> String {
        if !self.username.is_empty() {
            self.username.clone()
        } else if !self.name.is_empty() {
            self.name.clone()
        } else {
            format!("User{}", self.id)
        }
    }
}

/// Payload for `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
}

/// An entry in the user selection list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOption {
    pub id: UserId,
    pub label: String,
}

impl fmt::Display for UserOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}

impl From<&User> for UserOption {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            label: user.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, username: &str) -> User {
        User {
            id: UserId::new(11),
            name: name.into(),
            username: username.into(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
        }
    }

    #[test]
    fn test_label_fallbacks() {
        assert_eq!(user("Ada", "ada99").label(), "ada99");
        assert_eq!(user("Ada", "").label(), "Ada");
        assert_eq!(user("", "").label(), "User11");
    }

    #[test]
    fn test_user_from_partial_response() {
        let user: User = serde_json::from_str(r#"{"id": 11, "username": "neo"}"#).unwrap();
        assert_eq!(UserOption::from(&user).to_string(), "neo (11)");
    }
}
