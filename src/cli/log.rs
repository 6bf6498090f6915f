//! Transcript CLI command
//!
//! Shows or exports the activity transcript written when
//! `transcript_enabled` is set.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::activity::{Transcript, TranscriptLine};
use crate::config::RestdeskPaths;
use crate::display::{format_activity_table, format_result_list};
use crate::error::{RestdeskError, RestdeskResult};
use crate::export::{export_transcript_csv, export_transcript_json, export_transcript_yaml};

/// Transcript output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Tables of entries and results
    Table,
    /// Full JSON document
    Json,
    /// Full YAML document
    Yaml,
    /// One row per entry and result
    Csv,
}

/// Arguments of `restdesk log`
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: LogFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only the most recent N entries and results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Delete the transcript
    #[arg(long, conflicts_with_all = ["output", "limit"])]
    pub clear: bool,
}

/// Handle `restdesk log`
pub fn handle_log_command(paths: &RestdeskPaths, args: LogArgs) -> RestdeskResult<()> {
    let transcript = Transcript::new(paths.transcript_file());

    if !transcript.exists() {
        println!("No transcript at {}", transcript.path().display());
        println!("Set \"transcript_enabled\": true in config.json to record one.");
        return Ok(());
    }

    if args.clear {
        fs::remove_file(transcript.path())
            .map_err(|e| RestdeskError::Io(format!("Failed to remove transcript: {}", e)))?;
        println!("Transcript cleared.");
        return Ok(());
    }

    let mut lines = transcript.read_all()?;
    if let Some(limit) = args.limit {
        let skip = lines.len().saturating_sub(limit);
        lines.drain(..skip);
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                RestdeskError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_lines(&lines, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| RestdeskError::Export(e.to_string()))?;
            println!("Transcript exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_lines(&lines, args.format, &mut writer)?;
        }
    }

    Ok(())
}

fn write_lines<W: Write>(
    lines: &[TranscriptLine],
    format: LogFormat,
    writer: &mut W,
) -> RestdeskResult<()> {
    match format {
        LogFormat::Table => {
            // Newest first, as in the activity panels
            let mut entries = Vec::new();
            let mut results = Vec::new();
            for line in lines.iter().rev() {
                match line {
                    TranscriptLine::Entry(entry) => entries.push(entry.clone()),
                    TranscriptLine::Result(record) => results.push(record.clone()),
                }
            }

            let io_err = |e: io::Error| RestdeskError::Export(e.to_string());
            writeln!(writer, "Network log").map_err(io_err)?;
            writeln!(writer, "{}", format_activity_table(&entries)).map_err(io_err)?;
            writeln!(writer).map_err(io_err)?;
            writeln!(writer, "Results").map_err(io_err)?;
            writeln!(writer, "{}", format_result_list(&results)).map_err(io_err)?;
            Ok(())
        }
        LogFormat::Json => export_transcript_json(lines, writer, true),
        LogFormat::Yaml => export_transcript_yaml(lines, writer),
        LogFormat::Csv => export_transcript_csv(lines, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{ActivityEntry, EntryKind, ResultRecord};
    use serde_json::json;
    use tempfile::TempDir;

    fn write_transcript(paths: &RestdeskPaths) -> Transcript {
        paths.ensure_directories().unwrap();
        let transcript = Transcript::new(paths.transcript_file());
        transcript
            .append(&TranscriptLine::Entry(ActivityEntry::new(
                EntryKind::Info,
                "Application initialized",
                None,
            )))
            .unwrap();
        transcript
            .append(&TranscriptLine::Result(ResultRecord::new(
                "POST",
                "/posts",
                "Post created successfully!",
                json!({"id": 101}),
            )))
            .unwrap();
        transcript
    }

    #[test]
    fn test_table_output() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RestdeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let lines = write_transcript(&paths).read_all().unwrap();

        let mut output = Vec::new();
        write_lines(&lines, LogFormat::Table, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("Network log\n"));
        assert!(text.contains("Application initialized"));
        assert!(text.contains("POST /posts"));
    }

    #[test]
    fn test_export_to_file_and_clear() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RestdeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let transcript = write_transcript(&paths);
        let output = temp_dir.path().join("activity.csv");

        handle_log_command(
            &paths,
            LogArgs {
                format: LogFormat::Csv,
                output: Some(output.clone()),
                limit: Some(1),
                clear: false,
            },
        )
        .unwrap();

        let csv_text = fs::read_to_string(&output).unwrap();
        assert_eq!(csv_text.lines().count(), 2);
        assert!(csv_text.contains("/posts"));

        handle_log_command(
            &paths,
            LogArgs {
                format: LogFormat::Table,
                output: None,
                limit: None,
                clear: true,
            },
        )
        .unwrap();
        assert!(!transcript.exists());
    }
}
