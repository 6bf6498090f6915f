//! Core data models for restdesk
//!
//! Wire shapes for the posts, users and comments resources of the API.

pub mod comment;
pub mod ids;
pub mod post;
pub mod user;

pub use comment::{Comment, NewComment};
pub use ids::{CommentId, PostId, UserId};
pub use post::{NewPost, Post, PostExample, PostUpdate};
pub use user::{NewUser, User, UserOption};
