//! Post service
//!
//! Runs the create, load, update and delete workflows for posts: client-side
//! checks, attachment encoding, the request itself, and the activity panel
//! entries for each step.

use std::path::PathBuf;

use serde_json::json;

use crate::activity::{generate_diff, ResultRecord};
use crate::api::client::posts_path;
use crate::error::RestdeskResult;
use crate::models::{NewPost, Post, PostExample, PostId, PostUpdate};
use crate::session::Session;
use crate::upload;
use crate::validation::validate_new_post;

use super::record_failure;

/// Raw input of the create form
#[derive(Debug, Clone, Default)]
pub struct CreatePostInput {
    pub title: String,
    pub body: String,
    /// Unparsed user id field
    pub user_id: String,
    /// Optional image to attach
    pub attachment: Option<PathBuf>,
}

impl CreatePostInput {
    /// Form pre-filled from one of the canned examples
    pub fn from_example(example: PostExample, user_id: impl Into<String>) -> Self {
        let (title, body) = example.contents();
        Self {
            title: title.to_string(),
            body: body.to_string(),
            user_id: user_id.into(),
            attachment: None,
        }
    }
}

/// Service for post operations
pub struct PostService<'a> {
    session: &'a Session,
}

impl<'a> PostService<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Validate, encode the attachment, and create the post
    pub fn create(&self, input: CreatePostInput) -> RestdeskResult<Post> {
        let activity = &self.session.activity;

        let user_id = validate_new_post(&input.title, &input.body, &input.user_id)
            .inspect_err(|e| {
                activity.error(None, e.to_string());
            })?;

        let mut post = NewPost::new(input.title, input.body, user_id);

        if let Some(path) = &input.attachment {
            let attachment = upload::encode_file(path).inspect_err(|e| {
                activity.error(None, format!("File upload error: {}", e));
            })?;
            activity.info(format!("File \"{}\" processed", attachment.file_name));
            post.attachment = Some(attachment.data_url);
        }

        let exchange = activity.request(format!("Creating post \"{}\"", post.title));

        match self.session.client.create_post(&post) {
            Ok(created) => {
                activity.response(exchange, format!("Post created (ID: {})", created.id));
                activity.record_result(
                    ResultRecord::new(
                        "POST",
                        "/posts",
                        "Post created successfully!",
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
                "/posts",
                "Failed to create post",
                err,
            )),
        }
    }

    /// Fetch a post so the update form can be pre-filled
    pub fn load_for_update(&self, id: PostId) -> RestdeskResult<Post> {
        let activity = &self.session.activity;
        let exchange = activity.request(format!("Loading post {}", id));

        match self.session.client.get_post(id) {
            Ok(post) => {
                activity.response(exchange, format!("Post {} loaded", id));
                activity.record_result(
                    ResultRecord::new("GET", posts_path(id), "Post loaded", serde_json::to_value(&post)?)
                        .with_exchange(exchange),
                );
                Ok(post)
            }
            Err(err) => Err(record_failure(
                self.session,
                exchange,
                "GET",
                &posts_path(id),
                "Failed to load post",
                err,
            )),
        }
    }

    /// Replace a post's title and body
    ///
    /// When the previously loaded post is given, the changed fields are
    /// summarised in the network log.
    pub fn update(
        &self,
        id: PostId,
        title: &str,
        body: &str,
        previous: Option<&Post>,
    ) -> RestdeskResult<Post> {
        let activity = &self.session.activity;
        let update = PostUpdate::new(id, title, body);
        let exchange = activity.request(format!("Updating post {}", id));

        match self.session.client.update_post(&update) {
            Ok(updated) => {
                activity.response(exchange, format!("Post {} updated", id));
                let data = serde_json::to_value(&updated)?;
                if let Some(before) = previous {
                    if let Some(diff) = generate_diff(&serde_json::to_value(before)?, &data) {
                        activity.info(format!("Changes: {}", diff));
                    }
                }
                activity.record_result(
                    ResultRecord::new("PUT", posts_path(id), "Post updated!", data)
                        .with_exchange(exchange),
                );
                Ok(updated)
            }
            Err(err) => Err(record_failure(
                self.session,
                exchange,
                "PUT",
                &posts_path(id),
                "Update failed",
                err,
            )),
        }
    }

    /// Delete a post; confirmation is the caller's job
    pub fn delete(&self, id: PostId) -> RestdeskResult<()> {
        let activity = &self.session.activity;
        let exchange = activity.request(format!("Deleting post {}", id));

        match self.session.client.delete_post(id) {
            Ok(()) => {
                activity.response(exchange, format!("Post {} deleted successfully", id));
                activity.record_result(
                    ResultRecord::new(
                        "DELETE",
                        posts_path(id),
                        "Post deleted!",
                        json!({"deleted": true, "id": id}),
                    )
                    .with_exchange(exchange),
                );
                Ok(())
            }
            Err(err) => Err(record_failure(
                self.session,
                exchange,
                "DELETE",
                &posts_path(id),
                "Delete failed",
                err,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::EntryKind;
    use crate::config::Settings;
    use crate::error::RestdeskError;
    use tempfile::TempDir;

    fn offline_session() -> Session {
        let settings = Settings {
            api_base_url: "http://127.0.0.1:9".into(),
            request_timeout_secs: 2,
            ..Settings::default()
        };
        Session::in_memory(settings).unwrap()
    }

    #[test]
    fn test_validation_failure_never_sends() {
        let session = offline_session();
        let service = PostService::new(&session);

        let err = service
            .create(CreatePostInput {
                title: "Hi".into(),
                body: "long enough body".into(),
                user_id: "1".into(),
                attachment: None,
            })
            .unwrap_err();

        assert!(err.is_local());
        let entries = session.activity.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Error);
        assert!(entries[0].message.contains("Title must be at least 3 characters"));
        assert!(session.activity.results().is_empty());
    }

    #[test]
    fn test_bad_attachment_never_sends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        std::fs::write(&path, "text").unwrap();

        let session = offline_session();
        let mut input = CreatePostInput::from_example(PostExample::Pokemon, "1");
        input.attachment = Some(path);

        let err = PostService::new(&session).create(input).unwrap_err();
        assert!(matches!(err, RestdeskError::Upload(_)));
        assert!(session.activity.entries()[0]
            .message
            .starts_with("File upload error"));
    }

    #[test]
    fn test_network_failure_is_logged_and_recorded() {
        let session = offline_session();
        let input = CreatePostInput::from_example(PostExample::Travel, "2");

        let err = PostService::new(&session).create(input).unwrap_err();
        assert!(matches!(err, RestdeskError::Network(_)));

        let entries = session.activity.entries();
        assert_eq!(entries[0].kind, EntryKind::Error);
        assert_eq!(entries[1].kind, EntryKind::Request);
        assert_eq!(entries[0].exchange, entries[1].exchange);

        let result = session.activity.latest_result().unwrap();
        assert!(result.is_error());
        assert_eq!(result.message, "Failed to create post");
    }

    #[test]
    fn test_delete_failure_recorded_against_endpoint() {
        let session = offline_session();
        assert!(PostService::new(&session).delete(PostId::new(3)).is_err());

        let result = session.activity.latest_result().unwrap();
        assert_eq!(result.method, "DELETE");
        assert_eq!(result.endpoint, "/posts/3");
    }
}
