//! Username and website duplicate tracking
//!
//! The mock API never rejects duplicates, so the client keeps its own
//! record of values already taken: the API's five seed users plus anything
//! created during the session.

use std::collections::HashSet;

use crate::error::{RestdeskError, RestdeskResult};
use crate::models::{NewUser, User};

const SEED_USERNAMES: [&str; 5] = ["bret", "antonette", "samantha", "karianne", "kamren"];
const SEED_WEBSITES: [&str; 5] = [
    "hildegard.org",
    "anastasia.net",
    "ramiro.info",
    "kale.biz",
    "ola.org",
];

/// Lookup capability for taken usernames and websites
pub trait DuplicateLookup {
    /// Whether the username is already in use (case-insensitive)
    fn username_taken(&self, username: &str) -> bool;

    /// Whether the website is already in use (case-insensitive)
    fn website_taken(&self, website: &str) -> bool;
}

/// In-memory registry of taken usernames and websites
#[derive(Debug, Clone, Default)]
pub struct DuplicateRegistry {
    usernames: HashSet<String>,
    websites: HashSet<String>,
}

impl DuplicateRegistry {
    /// Registry preloaded with the API's seed users
    pub fn seeded() -> Self {
        let mut registry = Self::default();
        for username in SEED_USERNAMES {
            registry.usernames.insert(username.to_string());
        }
        for website in SEED_WEBSITES {
            registry.websites.insert(website.to_string());
        }
        registry
    }

    /// Record a created user's username and website as taken
    pub fn register(&mut self, user: &User) {
        if !user.username.is_empty() {
            self.usernames.insert(normalize(&user.username));
        }
        if !user.website.is_empty() {
            self.websites.insert(normalize(&user.website));
        }
    }

    /// Number of tracked usernames
    pub fn username_count(&self) -> usize {
        self.usernames.len()
    }
}

impl DuplicateLookup for DuplicateRegistry {
    fn username_taken(&self, username: &str) -> bool {
        self.usernames.contains(&normalize(username))
    }

    fn website_taken(&self, website: &str) -> bool {
        self.websites.contains(&normalize(website))
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Check a user form before it is sent
///
/// Name, username and email are required; the username and a non-empty
/// website must not already be taken.
pub fn check_new_user(user: &NewUser, lookup: &dyn DuplicateLookup) -> RestdeskResult<()> {
    for (field, value) in [
        ("Name", &user.name),
        ("Username", &user.username),
        ("Email", &user.email),
    ] {
        if value.trim().is_empty() {
            return Err(RestdeskError::Validation(format!("{} is required", field)));
        }
    }

    if lookup.username_taken(&user.username) {
        return Err(RestdeskError::Duplicate {
            field: "username",
            value: user.username.clone(),
        });
    }

    if !user.website.trim().is_empty() && lookup.website_taken(&user.website) {
        return Err(RestdeskError::Duplicate {
            field: "website",
            value: user.website.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    fn new_user(username: &str, website: &str) -> NewUser {
        NewUser {
            name: "Test User".into(),
            username: username.into(),
            email: "test@example.com".into(),
            phone: String::new(),
            website: website.into(),
        }
    }

    #[test]
    fn test_seeded_lookups_ignore_case() {
        let registry = DuplicateRegistry::seeded();
        assert!(registry.username_taken("Bret"));
        assert!(registry.username_taken("KAMREN"));
        assert!(registry.website_taken("Kale.Biz"));
        assert!(!registry.username_taken("neo"));
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let registry = DuplicateRegistry::seeded();
        let err = check_new_user(&new_user("Samantha", ""), &registry).unwrap_err();
        assert_eq!(err.to_string(), "username \"Samantha\" has been used");
    }

    #[test]
    fn test_duplicate_website_rejected_only_when_present() {
        let registry = DuplicateRegistry::seeded();
        let err = check_new_user(&new_user("neo", "ola.org"), &registry).unwrap_err();
        assert!(matches!(err, RestdeskError::Duplicate { field: "website", .. }));
        assert!(check_new_user(&new_user("neo", ""), &registry).is_ok());
    }

    #[test]
    fn test_required_fields() {
        let registry = DuplicateRegistry::seeded();
        let mut user = new_user("neo", "");
        user.email = "  ".into();
        let err = check_new_user(&user, &registry).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Email is required");
    }

    #[test]
    fn test_register_created_user() {
        let mut registry = DuplicateRegistry::seeded();
        let created = User {
            id: UserId::new(11),
            name: "Neo".into(),
            username: "Neo".into(),
            email: "neo@example.com".into(),
            phone: String::new(),
            website: "Matrix.io".into(),
        };
        registry.register(&created);

        assert_eq!(registry.username_count(), 6);
        assert!(registry.username_taken("neo"));
        assert!(registry.website_taken("matrix.io"));
    }
}
