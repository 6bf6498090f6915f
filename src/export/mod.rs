//! Transcript export
//!
//! Writes the recorded activity in several formats:
//! - JSON: the full transcript with metadata
//! - YAML: the same document, human-readable
//! - CSV: one row per log entry and result, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transcript_csv;
pub use json::{export_transcript_json, TranscriptExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_transcript_yaml;
