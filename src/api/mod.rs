//! REST API access
//!
//! `ApiClient` performs the blocking requests; `status` turns error
//! statuses into messages fit for the activity panel.

pub mod client;
pub mod status;

pub use client::ApiClient;
