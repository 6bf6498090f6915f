//! restdesk - Terminal client for a mock REST API
//!
//! Form-driven CRUD against a JSONPlaceholder-style service: create, load,
//! update and delete posts, create users and comments, and build a post
//! through a three-step wizard. Every exchange is mirrored into an in-app
//! activity log and result panel.
//!
//! # Architecture
//!
//! - `wizard`: the step-by-step post wizard, independent of any front-end
//! - `validation`: form rules and the duplicate registry
//! - `api`: blocking HTTP client and status-code mapping
//! - `services`: validate, call the API, log the exchange
//! - `session`: client, activity panels and user lists shared by the forms
//! - `activity`: network log entries, result records, transcript
//! - `cli`, `tui`: the two front-ends
//!
//! # Example
//!
//! ```rust,ignore
//! use restdesk::config::{RestdeskPaths, Settings};
//! use restdesk::session::Session;
//!
//! let paths = RestdeskPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let session = Session::new(settings, &paths)?;
//! ```

pub mod activity;
pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod session;
pub mod tui;
pub mod upload;
pub mod validation;
pub mod wizard;

pub use error::{RestdeskError, RestdeskResult};
