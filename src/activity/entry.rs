//! Activity entry data structures
//!
//! Defines the network log entries and the result records shown in the
//! result panel.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What an activity entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// General status messages
    Info,
    /// A request is about to be sent
    Request,
    /// A successful response arrived
    Response,
    /// Validation or network failure
    Error,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Info => write!(f, "INFO"),
            EntryKind::Request => write!(f, "REQUEST"),
            EntryKind::Response => write!(f, "RESPONSE"),
            EntryKind::Error => write!(f, "ERROR"),
        }
    }
}

/// A single line of the network log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Unique id of this entry
    pub id: Uuid,

    /// When the entry was recorded (UTC)
    pub timestamp: DateTime<Utc>,

    pub kind: EntryKind,

    pub message: String,

    /// Shared by the request entry and its response or error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<Uuid>,
}

impl ActivityEntry {
    pub fn new(kind: EntryKind, message: impl Into<String>, exchange: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
            message: message.into(),
            exchange,
        }
    }

    /// `[HH:MM:SS] message` in local time
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {}",
            self.timestamp.with_timezone(&Local).format("%H:%M:%S"),
            self.message
        )
    }
}

/// A request/response pair shown in the result panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub timestamp: DateTime<Utc>,

    /// HTTP method, e.g. `POST`
    pub method: String,

    /// Endpoint label, e.g. `/posts (Wizard)`
    pub endpoint: String,

    /// Headline, e.g. `Post created successfully!`
    pub message: String,

    /// Response body, or `{"error": ...}` for failures
    pub data: serde_json::Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<Uuid>,
}

impl ResultRecord {
    pub fn new(
        method: impl Into<String>,
        endpoint: impl Into<String>,
        message: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            method: method.into(),
            endpoint: endpoint.into(),
            message: message.into(),
            data,
            exchange: None,
        }
    }

    /// Link the record to the log entries of its exchange
    pub fn with_exchange(mut self, exchange: Uuid) -> Self {
        self.exchange = Some(exchange);
        self
    }

    /// Failure records carry an `error` field in their data
    pub fn is_error(&self) -> bool {
        self.data.get("error").is_some()
    }

    /// `METHOD message`
    pub fn headline(&self) -> String {
        format!("{} {}", self.method, self.message)
    }

    /// Pretty-printed data
    pub fn pretty_data(&self) -> String {
        serde_json::to_string_pretty(&self.data).unwrap_or_else(|_| self.data.to_string())
    }
}
