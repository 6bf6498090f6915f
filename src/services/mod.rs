//! Service layer for restdesk
//!
//! Each service runs one form's workflow against a `Session`: validate,
//! send, and record the exchange in the activity panels.

pub mod comment;
pub mod post;
pub mod user;
pub mod wizard;

pub use comment::CommentService;
pub use post::{CreatePostInput, PostService};
pub use user::UserService;
pub use wizard::{log_wizard_event, SessionSubmitter};

use serde_json::json;
use uuid::Uuid;

use crate::activity::ResultRecord;
use crate::error::RestdeskError;
use crate::session::Session;

/// Log a failed exchange and add an error record to the result panel
///
/// Returns the error so callers can propagate it.
pub(crate) fn record_failure(
    session: &Session,
    exchange: Uuid,
    method: &str,
    endpoint: &str,
    headline: &str,
    err: RestdeskError,
) -> RestdeskError {
    let message = err.to_string();
    session
        .activity
        .error(Some(exchange), format!("{}: {}", headline, message));
    session.activity.record_result(
        ResultRecord::new(method, endpoint, headline, json!({ "error": message }))
            .with_exchange(exchange),
    );
    err
}
