//! Comment service

use crate::activity::ResultRecord;
use crate::error::{RestdeskError, RestdeskResult};
use crate::models::{Comment, NewComment};
use crate::session::Session;

use super::record_failure;

/// Service for comment operations
pub struct CommentService<'a> {
    session: &'a Session,
}

impl<'a> CommentService<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Add a comment to a post
    pub fn create(&self, comment: NewComment) -> RestdeskResult<Comment> {
        let activity = &self.session.activity;

        if comment.body.trim().is_empty() {
            let err = RestdeskError::Validation("Comment body is required".into());
            activity.error(None, err.to_string());
            return Err(err);
        }

        let exchange = activity.request(format!("Adding comment to post {}", comment.post_id));

        match self.session.client.create_comment(&comment) {
            Ok(created) => {
                activity.response(exchange, format!("Comment added (ID: {})", created.id));
                activity.record_result(
                    ResultRecord::new(
                        "POST",
                        "/comments",
                        "Comment added!",
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
                "/comments",
                "Failed to add comment",
                err,
            )),
        }
    }
}
