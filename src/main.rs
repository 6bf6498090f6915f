use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use restdesk::cli::{
    handle_comment_command, handle_log_command, handle_post_command, handle_user_command,
    run_console_wizard, CommentCommands, LogArgs, PostCommands, UserCommands,
};
use restdesk::config::{RestdeskPaths, Settings};
use restdesk::display::{format_post_details, OutputFormat};
use restdesk::session::Session;

#[derive(Parser)]
#[command(
    name = "restdesk",
    version,
    about = "Terminal client for CRUD requests against a mock REST API",
    long_about = "restdesk creates, loads, updates and deletes posts, creates users \
                  and comments, and walks through a step-by-step post wizard against \
                  a JSONPlaceholder-style API. Every request and response is logged."
)]
struct Cli {
    /// Output format for results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Post commands
    #[command(subcommand)]
    Post(PostCommands),

    /// User commands
    #[command(subcommand)]
    User(UserCommands),

    /// Comment commands
    #[command(subcommand)]
    Comment(CommentCommands),

    /// Create a post step by step
    Wizard,

    /// Show or export the activity transcript
    Log(LogArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to config.json
        #[arg(long)]
        init: bool,
    },
}

fn init_tracing(verbose: bool, paths: &RestdeskPaths, tui: bool) -> Result<()> {
    let default_level = if verbose { "restdesk=debug" } else { "restdesk=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if tui {
        // The TUI owns the terminal; send tracing output to a file
        paths.ensure_directories()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths.log_file())?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = RestdeskPaths::new()?;
    let is_tui = matches!(cli.command, Some(Commands::Tui));
    init_tracing(cli.verbose, &paths, is_tui)?;

    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            let session = Session::new(settings, &paths)?;
            restdesk::tui::run_tui(&session)?;
        }
        Some(Commands::Post(cmd)) => {
            let session = Session::new(settings, &paths)?;
            handle_post_command(&session, cmd, cli.format)?;
        }
        Some(Commands::User(cmd)) => {
            let session = Session::new(settings, &paths)?;
            handle_user_command(&session, cmd, cli.format)?;
        }
        Some(Commands::Comment(cmd)) => {
            let session = Session::new(settings, &paths)?;
            handle_comment_command(&session, cmd, cli.format)?;
        }
        Some(Commands::Wizard) => {
            let session = Session::new(settings, &paths)?;
            if let Some(post) = run_console_wizard(&session)? {
                println!();
                print!("{}", format_post_details(&post));
            }
        }
        Some(Commands::Log(args)) => {
            handle_log_command(&paths, args)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("restdesk Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Transcript file: {}", paths.transcript_file().display());
            println!("TUI log file:    {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  API base URL:       {}", settings.api_base_url);
            println!("  Request timeout:    {}s", settings.request_timeout_secs);
            println!("  Activity limit:     {}", settings.activity_limit);
            println!("  Transcript enabled: {}", settings.transcript_enabled);
            println!("  Default user ID:    {}", settings.default_user_id);
        }
        None => {
            println!("restdesk - Terminal client for a mock REST API");
            println!();
            println!("Run 'restdesk --help' for usage information.");
            println!("Run 'restdesk tui' to launch the interactive interface.");
            println!("Run 'restdesk wizard' to create a post step by step.");
        }
    }

    Ok(())
}
