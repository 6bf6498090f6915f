//! Blocking HTTP client for the posts, users and comments resources

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{RestdeskError, RestdeskResult};
use crate::models::{Comment, NewComment, NewPost, NewUser, Post, PostId, PostUpdate, User};

/// Thin wrapper over a reqwest client bound to one API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from settings (base URL and request timeout)
    pub fn new(settings: &Settings) -> RestdeskResult<Self> {
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .user_agent(concat!("restdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RestdeskError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: settings.api_base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/posts/1`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `POST /posts`
    pub fn create_post(&self, post: &NewPost) -> RestdeskResult<Post> {
        self.send_json(self.request(Method::POST, "/posts").json(post))
    }

    /// `GET /posts/{id}`
    pub fn get_post(&self, id: PostId) -> RestdeskResult<Post> {
        let response = self.request(Method::GET, &posts_path(id)).send()?;
        if !response.status().is_success() {
            debug!(status = response.status().as_u16(), %id, "post lookup failed");
            return Err(RestdeskError::post_not_found(id.to_string()));
        }
        Ok(response.json()?)
    }

    /// `PUT /posts/{id}`
    pub fn update_post(&self, update: &PostUpdate) -> RestdeskResult<Post> {
        self.send_json(self.request(Method::PUT, &posts_path(update.id)).json(update))
    }

    /// `DELETE /posts/{id}`
    pub fn delete_post(&self, id: PostId) -> RestdeskResult<()> {
        let response = self.request(Method::DELETE, &posts_path(id)).send()?;
        check_status(response.status())
    }

    /// `POST /users`
    pub fn create_user(&self, user: &NewUser) -> RestdeskResult<User> {
        self.send_json(self.request(Method::POST, "/users").json(user))
    }

    /// `POST /comments`
    pub fn create_comment(&self, comment: &NewComment) -> RestdeskResult<Comment> {
        self.send_json(self.request(Method::POST, "/comments").json(comment))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(%method, %url, "sending request");
        self.http.request(method, url)
    }

    fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> RestdeskResult<T> {
        let response = request.send()?;
        check_status(response.status())?;
        Ok(response.json()?)
    }
}

/// Endpoint path for a single post
pub fn posts_path(id: PostId) -> String {
    format!("/posts/{}", id)
}

fn check_status(status: reqwest::StatusCode) -> RestdeskResult<()> {
    if status.is_success() {
        return Ok(());
    }
    warn!(status = status.as_u16(), "request rejected by API");
    Err(RestdeskError::http(
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        let settings = Settings {
            api_base_url: base.to_string(),
            ..Settings::default()
        };
        ApiClient::new(&settings).unwrap()
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let api = client("https://example.test/");
        assert_eq!(api.base_url(), "https://example.test");
        assert_eq!(api.url("/posts"), "https://example.test/posts");
        assert_eq!(api.url("users"), "https://example.test/users");
    }

    #[test]
    fn test_posts_path() {
        assert_eq!(posts_path(PostId::new(42)), "/posts/42");
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(reqwest::StatusCode::CREATED).is_ok());
        let err = check_status(reqwest::StatusCode::UNAUTHORIZED).unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Authentication required.");
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        // Port 9 on localhost is closed on any sane test machine
        let api = client("http://127.0.0.1:9");
        let err = api.delete_post(PostId::new(1)).unwrap_err();
        assert!(matches!(err, RestdeskError::Network(_)));
    }
}
