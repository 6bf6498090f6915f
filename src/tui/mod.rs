//! Terminal User Interface module
//!
//! A tabbed TUI over the same services the CLI uses: create, manage, users
//! and comment forms, the step-by-step post wizard, and live network log
//! and result panels.

pub mod actions;
pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod wizard_port;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
