//! Post CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::{format_post_details, OutputFormat};
use crate::error::RestdeskResult;
use crate::models::{PostExample, PostId};
use crate::services::{CreatePostInput, PostService};
use crate::session::Session;

use super::{confirm, print_structured_result};

/// Post subcommands
#[derive(Subcommand, Debug)]
pub enum PostCommands {
    /// Create a post
    Create {
        /// Post title (at least 3 characters)
        #[arg(short, long)]
        title: Option<String>,
        /// Post body (at least 10 characters)
        #[arg(short, long)]
        body: Option<String>,
        /// Author's user ID (defaults to the selected user)
        #[arg(short, long)]
        user_id: Option<String>,
        /// Image to attach (JPG, PNG, GIF or WEBP, max 1MB)
        #[arg(short, long)]
        attachment: Option<PathBuf>,
        /// Fill title and body from an example: pokemon, recipe, travel
        #[arg(short, long)]
        example: Option<String>,
    },
    /// Fetch a post
    Get {
        /// Post ID
        id: PostId,
    },
    /// Replace a post's title and body
    Update {
        /// Post ID
        id: PostId,
        /// New title (keeps the current one if omitted)
        #[arg(short, long)]
        title: Option<String>,
        /// New body (keeps the current one if omitted)
        #[arg(short, long)]
        body: Option<String>,
    },
    /// Delete a post
    Delete {
        /// Post ID
        id: PostId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a post command
pub fn handle_post_command(
    session: &Session,
    cmd: PostCommands,
    format: OutputFormat,
) -> RestdeskResult<()> {
    let service = PostService::new(session);

    match cmd {
        PostCommands::Create {
            title,
            body,
            user_id,
            attachment,
            example,
        } => {
            let mut input = match example {
                Some(name) => CreatePostInput::from_example(PostExample::from_name(&name), ""),
                None => CreatePostInput::default(),
            };
            if let Some(title) = title {
                input.title = title;
            }
            if let Some(body) = body {
                input.body = body;
            }
            input.user_id =
                user_id.unwrap_or_else(|| session.users.selected().get().to_string());
            input.attachment = attachment;

            let post = service.create(input)?;
            if !print_structured_result(session, format)? {
                println!("Post created successfully!");
                print!("{}", format_post_details(&post));
            }
        }
        PostCommands::Get { id } => {
            let post = service.load_for_update(id)?;
            if !print_structured_result(session, format)? {
                print!("{}", format_post_details(&post));
            }
        }
        PostCommands::Update { id, title, body } => {
            let current = service.load_for_update(id)?;
            let title = title.unwrap_or_else(|| current.title.clone());
            let body = body.unwrap_or_else(|| current.body.clone());

            let post = service.update(id, &title, &body, Some(&current))?;
            if !print_structured_result(session, format)? {
                println!("Post updated!");
                if let Some(changes) = session
                    .activity
                    .entries()
                    .into_iter()
                    .find(|entry| entry.message.starts_with("Changes: "))
                {
                    println!("{}", changes.message);
                }
                print!("{}", format_post_details(&post));
            }
        }
        PostCommands::Delete { id, force } => {
            if !force && !confirm(&format!("Delete post {}?", id))? {
                println!("Cancelled.");
                return Ok(());
            }

            service.delete(id)?;
            if !print_structured_result(session, format)? {
                println!("Post {} deleted.", id);
            }
        }
    }

    Ok(())
}
