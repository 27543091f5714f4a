//! Records written to the exported question file.

use crate::parser::ParseReport;
use crate::types::Answer;
use serde::Serialize;

/// One exported question. `answer` is `null` when no answer token followed
/// the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord<'a> {
    pub section: Option<&'a str>,
    pub number: u32,
    pub question: &'a str,
    pub answer: Option<Answer>,
    pub explanation: &'a str,
}

/// Export view of every entry in a report, in document order.
pub fn export_records(report: &ParseReport) -> Vec<ExportRecord<'_>> {
    report
        .entries
        .iter()
        .map(|entry| ExportRecord {
            section: entry.section.as_deref(),
            number: entry.number,
            question: &entry.question,
            answer: entry.answer,
            explanation: &entry.explanation,
        })
        .collect()
}
