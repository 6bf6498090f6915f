//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the service layer.

pub mod comment;
pub mod log;
pub mod post;
pub mod user;
pub mod wizard;

pub use comment::{handle_comment_command, CommentCommands};
pub use log::{handle_log_command, LogArgs, LogFormat};
pub use post::{handle_post_command, PostCommands};
pub use user::{handle_user_command, UserCommands};
pub use wizard::{run_console_wizard, ConsoleRenderer};

use std::io::{self, Write};

use crate::display::{format_result, OutputFormat};
use crate::error::{RestdeskError, RestdeskResult};
use crate::session::Session;

/// Prompt for one line of input; `None` at end of input
pub(crate) fn prompt_line(prompt: &str) -> RestdeskResult<Option<String>> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| RestdeskError::Io(e.to_string()))?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| RestdeskError::Io(e.to_string()))?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask a yes/no question, defaulting to no
pub(crate) fn confirm(question: &str) -> RestdeskResult<bool> {
    let answer = prompt_line(&format!("{} (yes/no) [no]: ", question))?.unwrap_or_default();
    let answer = answer.trim().to_lowercase();
    Ok(answer == "yes" || answer == "y")
}

/// Print the most recent result record in structured formats
///
/// Returns `false` for text output so the caller prints its own summary.
pub(crate) fn print_structured_result(
    session: &Session,
    format: OutputFormat,
) -> RestdeskResult<bool> {
    if format == OutputFormat::Text {
        return Ok(false);
    }
    if let Some(record) = session.activity.latest_result() {
        print!("{}", format_result(&record, format)?);
    }
    Ok(true)
}
