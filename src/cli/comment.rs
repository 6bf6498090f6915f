//! Comment CLI commands

use clap::Subcommand;

use crate::display::OutputFormat;
use crate::error::RestdeskResult;
use crate::models::{NewComment, PostId};
use crate::services::CommentService;
use crate::session::Session;

use super::print_structured_result;

/// Comment subcommands
#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// Add a comment to a post
    Create {
        /// Comment text
        #[arg(short, long)]
        body: String,
        /// Post to comment on
        #[arg(short, long, default_value = "1")]
        post_id: PostId,
    },
}

/// Handle a comment command
pub fn handle_comment_command(
    session: &Session,
    cmd: CommentCommands,
    format: OutputFormat,
) -> RestdeskResult<()> {
    match cmd {
        CommentCommands::Create { body, post_id } => {
            let comment =
                CommentService::new(session).create(NewComment::new(body).on_post(post_id))?;

            if !print_structured_result(session, format)? {
                println!("Comment added!");
                println!("  ID:      {}", comment.id);
                println!("  Post ID: {}", comment.post_id);
                println!("  Body:    {}", comment.body);
            }
        }
    }

    Ok(())
}
