//! Activity panels for restdesk
//!
//! Every request/response pair is observable in two panels:
//!
//! - the network log: short timestamped lines (`ActivityEntry`), with a
//!   request and its answer linked by an exchange id
//! - the result panel: the response body or error for each operation
//!   (`ResultRecord`)
//!
//! Both live in memory for the session (`ActivityLog`). When enabled in the
//! settings they are also mirrored line by line to a JSONL `Transcript`.
//!
//! # Example
//!
//! ```rust,ignore
//! use restdesk::activity::{ActivityLog, ResultRecord};
//!
//! let log = ActivityLog::new(200);
//! let exchange = log.request("Creating post \"Hello\"");
//! log.response(exchange, "Post created (ID: 101)");
//! log.record_result(ResultRecord::new("POST", "/posts", "Post created successfully!", body));
//! ```

mod diff;
mod entry;
mod log;
mod transcript;

pub use diff::generate_diff;
pub use entry::{ActivityEntry, EntryKind, ResultRecord};
pub use log::ActivityLog;
pub use transcript::{Transcript, TranscriptLine};
