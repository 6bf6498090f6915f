//! CSV export of the transcript
//!
//! Entries and results share one sheet; result rows carry the method and
//! endpoint, entry rows carry the log kind.

use std::io::Write;

use crate::activity::TranscriptLine;
use crate::error::{RestdeskError, RestdeskResult};

const HEADER: [&str; 7] = [
    "Timestamp",
    "Type",
    "Kind",
    "Method",
    "Endpoint",
    "Message",
    "Data",
];

/// Export transcript lines to CSV
pub fn export_transcript_csv<W: Write>(
    lines: &[TranscriptLine],
    writer: &mut W,
) -> RestdeskResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let csv_err = |e: csv::Error| RestdeskError::Export(e.to_string());

    csv_writer.write_record(HEADER).map_err(csv_err)?;

    for line in lines {
        match line {
            TranscriptLine::Entry(entry) => {
                csv_writer
                    .write_record([
                        entry.timestamp.to_rfc3339(),
                        "entry".to_string(),
                        entry.kind.to_string(),
                        String::new(),
                        String::new(),
                        entry.message.clone(),
                        String::new(),
                    ])
                    .map_err(csv_err)?;
            }
            TranscriptLine::Result(record) => {
                let kind = if record.is_error() { "ERROR" } else { "OK" };
                csv_writer
                    .write_record([
                        record.timestamp.to_rfc3339(),
                        "result".to_string(),
                        kind.to_string(),
                        record.method.clone(),
                        record.endpoint.clone(),
                        record.message.clone(),
                        record.data.to_string(),
                    ])
                    .map_err(csv_err)?;
            }
        }
    }

    csv_writer
        .flush()
        .map_err(|e| RestdeskError::Export(e.to_string()))?;
    Ok(())
}
