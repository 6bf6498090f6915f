//! Activity panel formatting
//!
//! Tables for the network log and the result panel, as printed by
//! `restdesk log`.

use chrono::Local;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::activity::{ActivityEntry, ResultRecord};

use super::format::{single_line, truncate};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Message")]
    message: String,
}

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Request")]
    request: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Data")]
    data: String,
}

/// Format log entries as a table, in the order given
pub fn format_activity_table(entries: &[ActivityEntry]) -> String {
    if entries.is_empty() {
        return "No activity recorded.".to_string();
    }

    let rows = entries.iter().map(|entry| EntryRow {
        time: entry
            .timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        kind: entry.kind.to_string(),
        message: truncate(&single_line(&entry.message), 80),
    });

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format result records as a table, in the order given
pub fn format_result_list(results: &[ResultRecord]) -> String {
    if results.is_empty() {
        return "No results recorded.".to_string();
    }

    let rows = results.iter().map(|record| ResultRow {
        time: record
            .timestamp
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string(),
        request: format!("{} {}", record.method, record.endpoint),
        outcome: if record.is_error() {
            format!("FAILED: {}", record.message)
        } else {
            record.message.clone()
        },
        data: truncate(&record.data.to_string(), 48),
    });

    Table::new(rows).with(Style::sharp()).to_string()
}
