//! JSON export of the transcript

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::{ActivityEntry, ResultRecord, TranscriptLine};
use crate::error::{RestdeskError, RestdeskResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported transcript document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Version of restdesk that wrote the export
    pub app_version: String,

    /// Log entries in recording order
    pub entries: Vec<ActivityEntry>,

    /// Result records in recording order
    pub results: Vec<ResultRecord>,

    pub metadata: ExportMetadata,
}

/// Summary counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub entry_count: usize,
    pub result_count: usize,
    /// Results carrying an `error` field
    pub failed_count: usize,
    pub first_recorded: Option<DateTime<Utc>>,
    pub last_recorded: Option<DateTime<Utc>>,
}

impl TranscriptExport {
    /// Split transcript lines into entries and results
    pub fn from_lines(lines: &[TranscriptLine]) -> Self {
        let mut entries = Vec::new();
        let mut results = Vec::new();

        for line in lines {
            match line {
                TranscriptLine::Entry(entry) => entries.push(entry.clone()),
                TranscriptLine::Result(record) => results.push(record.clone()),
            }
        }

        let timestamps = entries
            .iter()
            .map(|e| e.timestamp)
            .chain(results.iter().map(|r| r.timestamp));
        let first_recorded = timestamps.clone().min();
        let last_recorded = timestamps.max();

        let metadata = ExportMetadata {
            entry_count: entries.len(),
            result_count: results.len(),
            failed_count: results.iter().filter(|r| r.is_error()).count(),
            first_recorded,
            last_recorded,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            entries,
            results,
            metadata,
        }
    }
}

/// Export transcript lines as a JSON document
pub fn export_transcript_json<W: Write>(
    lines: &[TranscriptLine],
    writer: &mut W,
    pretty: bool,
) -> RestdeskResult<()> {
    let export = TranscriptExport::from_lines(lines);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| RestdeskError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| RestdeskError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::EntryKind;
    use serde_json::json;

    fn sample_lines() -> Vec<TranscriptLine> {
        vec![
            TranscriptLine::Entry(ActivityEntry::new(
                EntryKind::Request,
                "Creating post \"Hello\"",
                None,
            )),
            TranscriptLine::Result(ResultRecord::new(
                "POST",
                "/posts",
                "Post created successfully!",
                json!({"id": 101}),
            )),
            TranscriptLine::Result(ResultRecord::new(
                "DELETE",
                "/posts/3",
                "Delete failed",
                json!({"error": "Resource not found."}),
            )),
        ]
    }

    #[test]
    fn test_metadata_counts() {
        let export = TranscriptExport::from_lines(&sample_lines());
        assert_eq!(export.metadata.entry_count, 1);
        assert_eq!(export.metadata.result_count, 2);
        assert_eq!(export.metadata.failed_count, 1);
        assert!(export.metadata.first_recorded <= export.metadata.last_recorded);
    }

    #[test]
    fn test_json_export() {
        let mut output = Vec::new();
        export_transcript_json(&sample_lines(), &mut output, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["results"][0]["endpoint"], "/posts");
        assert_eq!(value["entries"][0]["kind"], "request");
    }

    #[test]
    fn test_empty_export() {
        let export = TranscriptExport::from_lines(&[]);
        assert!(export.metadata.first_recorded.is_none());
    }
}
