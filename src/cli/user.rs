//! User CLI commands

use clap::Subcommand;

use crate::display::{format_user_details, OutputFormat};
use crate::error::RestdeskResult;
use crate::models::NewUser;
use crate::services::UserService;
use crate::session::Session;

use super::print_structured_result;

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Create a user
    Create {
        /// Full name
        #[arg(short, long)]
        name: String,
        /// Username (must not already be taken)
        #[arg(short, long)]
        username: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Phone number
        #[arg(short, long, default_value = "")]
        phone: String,
        /// Website (must not already be taken)
        #[arg(short, long, default_value = "")]
        website: String,
    },
    /// List the users offered in selection lists
    List,
}

/// Handle a user command
pub fn handle_user_command(
    session: &Session,
    cmd: UserCommands,
    format: OutputFormat,
) -> RestdeskResult<()> {
    match cmd {
        UserCommands::Create {
            name,
            username,
            email,
            phone,
            website,
        } => {
            let user = UserService::new(session).create(NewUser {
                name,
                username,
                email,
                phone,
                website,
            })?;

            if !print_structured_result(session, format)? {
                println!("User created successfully!");
                print!("{}", format_user_details(&user));
            }
        }
        UserCommands::List => {
            let selected = session.users.selected();
            println!("{:4} {:20}", "ID", "User");
            println!("{}", "-".repeat(25));
            for option in session.users.options() {
                let marker = if option.id == selected { "*" } else { " " };
                println!("{:<4} {:20}{}", option.id.get(), option.label, marker);
            }
        }
    }

    Ok(())
}
