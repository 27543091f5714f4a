//! Normalized text to the JSON question file.

use super::{read_text, write_text};
use crate::config::Config;
use crate::error::Result;
use quiz_core::{export_records, parse_entries};

/// Counts reported after an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub exported: usize,
    pub unanswered: usize,
}

/// Export every question of the processed file, answered or not.
pub fn export_file(config: &Config) -> Result<ExportSummary> {
    let text = read_text(&config.processed_path)?;
    let report = parse_entries(&text, &config.classifier());
    let records = export_records(&report);

    let mut json = serde_json::to_string_pretty(&records)?;
    json.push('\n');
    write_text(&config.export_path, &json)?;

    let summary = ExportSummary {
        exported: records.len(),
        unanswered: report.dropped(),
    };
    if summary.unanswered > 0 {
        tracing::warn!(
            unanswered = summary.unanswered,
            "some questions have no answer line"
        );
    }
    tracing::info!(
        path = %config.export_path.display(),
        exported = summary.exported,
        "exported questions"
    );
    Ok(summary)
}
