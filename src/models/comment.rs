//! Comment model

use serde::{Deserialize, Serialize};

use super::ids::{CommentId, PostId};

/// A comment as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Payload for `POST /comments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: PostId,
    pub body: String,
}

impl NewComment {
    /// Comments default to post 1
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            post_id: PostId::new(1),
            body: body.into(),
        }
    }

    /// Attach the comment to a different post
    pub fn on_post(mut self, post_id: PostId) -> Self {
        self.post_id = post_id;
        self
    }
}
