//! Post model
//!
//! Request and response shapes for the `/posts` resource.

use serde::{Deserialize, Serialize};

use super::ids::{PostId, UserId};

/// A post as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Server-assigned identifier
    pub id: PostId,

    /// Post title
    #[serde(default)]
    pub title: String,

    /// Post body
    #[serde(default)]
    pub body: String,

    /// Author
    pub user_id: UserId,

    /// Data URL echoed back when the post was created with an attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

/// Payload for `POST /posts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: UserId,

    /// Base64 data URL of an attached image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

impl NewPost {
    /// Create a post payload without an attachment
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: UserId) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id,
            attachment: None,
        }
    }
}

/// Payload for `PUT /posts/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub user_id: UserId,
}

impl PostUpdate {
    /// Updates are always attributed to user 1, as the API expects a full record
    pub fn new(id: PostId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            user_id: UserId::new(1),
        }
    }
}

/// Canned post contents offered by the create form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostExample {
    Pokemon,
    Recipe,
    #[default]
    Travel,
}

impl PostExample {
    /// Parse an example name; unknown names fall back to travel
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "pokemon" => Self::Pokemon,
            "recipe" => Self::Recipe,
            _ => Self::Travel,
        }
    }

    /// The example's title and body
    pub fn contents(&self) -> (&'static str, &'static str) {
        match self {
            Self::Pokemon => ("Picachu Battle", "An epic battle of speed and lightning!"),
            Self::Recipe => (
                "Chocolate Cookies",
                "Perfectly crispy and soft cookies recipe.",
            ),
            Self::Travel => ("Tokyo Trip", "Sunrise at the Skytree was magical."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_wire_shape() {
        let post = NewPost::new("Hello", "A body long enough", UserId::new(7));
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"title": "Hello", "body": "A body long enough", "userId": 7})
        );
    }

    #[test]
    fn test_post_from_api_response() {
        let post: Post =
            serde_json::from_str(r#"{"title":"t","body":"b","userId":1,"id":101}"#).unwrap();
        assert_eq!(post.id, PostId::new(101));
        assert!(post.attachment.is_none());
    }

    #[test]
    fn test_update_is_attributed_to_user_one() {
        let update = PostUpdate::new(PostId::new(4), "t", "b");
        assert_eq!(update.user_id, UserId::new(1));
    }

    #[test]
    fn test_examples() {
        assert_eq!(PostExample::from_name("Pokemon"), PostExample::Pokemon);
        assert_eq!(PostExample::from_name("whatever"), PostExample::Travel);
        let (title, body) = PostExample::Recipe.contents();
        assert!(title.trim().len() >= 3);
        assert!(body.trim().len() >= 10);
    }
}
