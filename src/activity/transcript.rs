//! Append-only JSONL transcript of the activity panels
//!
//! Each line is one complete JSON object: either a log entry or a result
//! record, tagged by `type`. Every write is flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::entry::{ActivityEntry, ResultRecord};
use crate::error::{RestdeskError, RestdeskResult};

/// One line of the transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TranscriptLine {
    Entry(ActivityEntry),
    Result(ResultRecord),
}

/// Writes and reads the transcript file
#[derive(Debug, Clone)]
pub struct Transcript {
    path: PathBuf,
}

impl Transcript {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one line and flush
    pub fn append(&self, line: &TranscriptLine) -> RestdeskResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| RestdeskError::Io(format!("Failed to open transcript: {}", e)))?;

        let json = serde_json::to_string(line)
            .map_err(|e| RestdeskError::Json(format!("Failed to serialize transcript line: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| RestdeskError::Io(format!("Failed to write transcript: {}", e)))?;

        file.flush()
            .map_err(|e| RestdeskError::Io(format!("Failed to flush transcript: {}", e)))?;

        Ok(())
    }

    /// Read every line, oldest first
    pub fn read_all(&self) -> RestdeskResult<Vec<TranscriptLine>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .map_err(|e| RestdeskError::Io(format!("Failed to open transcript: {}", e)))?;

        let mut lines = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                RestdeskError::Io(format!(
                    "Failed to read transcript line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let parsed: TranscriptLine = serde_json::from_str(&line).map_err(|e| {
                RestdeskError::Json(format!(
                    "Failed to parse transcript line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            lines.push(parsed);
        }

        Ok(lines)
    }

    /// Only the log entries, oldest first
    pub fn read_entries(&self) -> RestdeskResult<Vec<ActivityEntry>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter_map(|line| match line {
                TranscriptLine::Entry(entry) => Some(entry),
                TranscriptLine::Result(_) => None,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::entry::EntryKind;
    use serde_json::json;
    use tempfile::TempDir;

    fn transcript() -> (Transcript, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let transcript = Transcript::new(temp_dir.path().join("transcript.jsonl"));
        (transcript, temp_dir)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let (transcript, _temp) = transcript();
        assert!(!transcript.exists());
        assert!(transcript.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_read_in_order() {
        let (transcript, _temp) = transcript();
        let entry = ActivityEntry::new(EntryKind::Request, "Creating post", None);
        let result = ResultRecord::new("POST", "/posts", "Post created!", json!({"id": 101}));

        transcript.append(&TranscriptLine::Entry(entry.clone())).unwrap();
        transcript.append(&TranscriptLine::Result(result)).unwrap();

        let lines = transcript.read_all().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], TranscriptLine::Entry(entry));
        assert!(matches!(lines[1], TranscriptLine::Result(_)));
        assert_eq!(transcript.read_entries().unwrap().len(), 1);
    }

    #[test]
    fn test_lines_are_tagged() {
        let (transcript, _temp) = transcript();
        let entry = ActivityEntry::new(EntryKind::Info, "hello", None);
        transcript.append(&TranscriptLine::Entry(entry)).unwrap();

        let raw = std::fs::read_to_string(transcript.path()).unwrap();
        assert!(raw.starts_with(r#"{"type":"entry""#));
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn test_corrupt_line_reports_line_number() {
        let (transcript, _temp) = transcript();
        std::fs::write(transcript.path(), "\nnot json\n").unwrap();
        let err = transcript.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
