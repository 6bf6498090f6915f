//! Client-side form validation
//!
//! - `post`: title/body/user id predicates for the post forms and the wizard
//! - `registry`: duplicate tracking for usernames and websites

pub mod post;
pub mod registry;

pub use post::{parse_user_id, validate_body, validate_new_post, validate_title};
pub use registry::{check_new_user, DuplicateLookup, DuplicateRegistry};
