//! Display formatting for terminal output
//!
//! Turns results, records and wizard snapshots into text for the CLI and the
//! console wizard.

pub mod activity;
pub mod format;
pub mod record;
pub mod wizard;

pub use activity::{format_activity_table, format_result_list};
pub use record::{format_post_details, format_result, format_user_details};
pub use wizard::{format_wizard_view, progress_bar};

use clap::ValueEnum;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Headline followed by pretty JSON
    #[default]
    Text,
    /// The result record as JSON
    Json,
    /// The result record as YAML
    Yaml,
}
