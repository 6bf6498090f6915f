//! User service
//!
//! Creates users after the duplicate checks and keeps the session's user
//! selection lists in sync with what was created.

use crate::activity::ResultRecord;
use crate::error::RestdeskResult;
use crate::models::{NewUser, User};
use crate::session::Session;
use crate::validation::check_new_user;

use super::record_failure;

/// Service for user operations
pub struct UserService<'a> {
    session: &'a Session,
}

impl<'a> UserService<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Check for duplicates, create the user, and add it to the selection lists
    pub fn create(&self, user: NewUser) -> RestdeskResult<User> {
        let activity = &self.session.activity;

        check_new_user(&user, &self.session.users).inspect_err(|e| {
            activity.error(None, format!("Error: {}", e));
        })?;

        let exchange = activity.request(format!("Creating user: \"{}\"", user.username));

        match self.session.client.create_user(&user) {
            Ok(created) => {
                let option = self.session.users.add_created(&created);
                activity.info(format!("Sync: Added \"{}\" to selection lists", option.label));
                activity.response(
                    exchange,
                    format!("User created successfully (ID: {})", created.id),
                );
                activity.record_result(
                    ResultRecord::new(
                        "POST",
                        "/users",
                        "User created successfully!",
                        serde_json::to_value(&created)?,
                    )
                    .with_exchange(exchange),
                );
                Ok(created)
            }
            Err(err) => Err(record_failure(
                self.session,
                exchange,
                "POST",
                "/users",
                "Error creating user",
                err,
            )),
        }
    }
}
