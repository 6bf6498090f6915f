//! YAML export of the transcript

use std::io::Write;

use crate::activity::TranscriptLine;
use crate::error::{RestdeskError, RestdeskResult};
use crate::export::json::TranscriptExport;

/// Export transcript lines as a YAML document with a comment header
pub fn export_transcript_yaml<W: Write>(
    lines: &[TranscriptLine],
    writer: &mut W,
) -> RestdeskResult<()> {
    let export = TranscriptExport::from_lines(lines);
    let io_err = |e: std::io::Error| RestdeskError::Export(e.to_string());

    writeln!(writer, "# restdesk activity transcript").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| RestdeskError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ResultRecord;
    use serde_json::json;

    #[test]
    fn test_yaml_export() {
        let lines = vec![TranscriptLine::Result(ResultRecord::new(
            "POST",
            "/users",
            "User created successfully!",
            json!({"id": 11, "username": "neo"}),
        ))];

        let mut output = Vec::new();
        export_transcript_yaml(&lines, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# restdesk activity transcript"));
        assert!(text.contains("endpoint: /users"));

        let body: String = text
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed: TranscriptExport = serde_yaml::from_str(&body).unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].data["username"], "neo");
    }
}
