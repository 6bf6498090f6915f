//! Configuration module for restdesk
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RestdeskPaths;
pub use settings::Settings;
