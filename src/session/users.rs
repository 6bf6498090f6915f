//! Session user directory
//!
//! Tracks the user selection list offered by the post forms and the
//! duplicate registry consulted before creating users. A freshly created
//! user is registered in both and becomes the selected default.

use std::sync::{PoisonError, RwLock};

use tracing::info;

use crate::models::{User, UserId, UserOption};
use crate::validation::{DuplicateLookup, DuplicateRegistry};

/// Seed users the API ships with, as (id, username)
const SEED_USERS: [(u64, &str); 5] = [
    (1, "Bret"),
    (2, "Antonette"),
    (3, "Samantha"),
    (4, "Karianne"),
    (5, "Kamren"),
];

pub struct UserDirectory {
    registry: RwLock<DuplicateRegistry>,
    options: RwLock<Vec<UserOption>>,
    selected: RwLock<UserId>,
}

impl UserDirectory {
    /// Directory with the seed users and `selected` preselected
    pub fn new(selected: UserId) -> Self {
        let options = SEED_USERS
            .iter()
            .map(|(id, username)| UserOption {
                id: UserId::new(*id),
                label: username.to_string(),
            })
            .collect();

        Self {
            registry: RwLock::new(DuplicateRegistry::seeded()),
            options: RwLock::new(options),
            selected: RwLock::new(selected),
        }
    }

    /// Register a created user and select it
    pub fn add_created(&self, user: &User) -> UserOption {
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .register(user);

        let option = UserOption::from(user);
        self.options
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(option.clone());
        *self.selected.write().unwrap_or_else(PoisonError::into_inner) = user.id;

        info!(id = %user.id, label = %option.label, "user added to selection lists");
        option
    }

    /// Options in the order they were added
    pub fn options(&self) -> Vec<UserOption> {
        self.options
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn selected(&self) -> UserId {
        *self.selected.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn select(&self, id: UserId) {
        *self.selected.write().unwrap_or_else(PoisonError::into_inner) = id;
    }

    /// Option adjacent to the selected one, wrapping around; used by the TUI
    pub fn cycle(&self, forward: bool) -> UserId {
        let options = self.options();
        if options.is_empty() {
            return self.selected();
        }
        let current = options
            .iter()
            .position(|o| o.id == self.selected())
            .unwrap_or(0);
        let len = options.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        let id = options[next].id;
        self.select(id);
        id
    }
}

impl DuplicateLookup for UserDirectory {
    fn username_taken(&self, username: &str) -> bool {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .username_taken(username)
    }

    fn website_taken(&self, website: &str) -> bool {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .website_taken(website)
    }
}
