//! Parser for normalized question files.
//!
//! # Format
//! ```text
//! CUESTIONES GENERALES
//! 1.- P implica Q
//! Verdadero
//! Esto es una explicación.
//! ```
//!
//! The answer must be on the line right after the question. The explanation
//! is every following plain line up to the next section, question or answer.

use crate::classify::{Classifier, LineKind};
use crate::normalize::join_until_boundary;
use crate::types::{ParsedEntry, Question};

/// Every question-start line found in a document, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub entries: Vec<ParsedEntry>,
}

impl ParseReport {
    /// Questions that can be asked, indexed by emission order. Entries
    /// without a valid answer are skipped.
    pub fn questions(&self) -> Vec<Question> {
        self.entries
            .iter()
            .filter_map(|entry| entry.answer.map(|answer| (entry, answer)))
            .enumerate()
            .map(|(index, (entry, answer))| Question {
                section: entry.section.clone(),
                number: entry.number,
                question: entry.question.clone(),
                answer,
                explanation: entry.explanation.clone(),
                index,
            })
            .collect()
    }

    /// Number of question-start lines with no answer after them.
    pub fn dropped(&self) -> usize {
        self.entries.iter().filter(|e| e.answer.is_none()).count()
    }
}

/// Parse normalized text into entries, keeping unanswered questions.
pub fn parse_entries(text: &str, classifier: &Classifier) -> ParseReport {
    let lines: Vec<&str> = text.lines().collect();
    let mut entries = Vec::new();
    let mut section: Option<String> = None;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();

        match classifier.classify(line) {
            LineKind::Section => {
                section = Some(line.to_string());
                i += 1;
            }
            LineKind::QuestionStart { number } => {
                let mut entry = ParsedEntry {
                    section: section.clone(),
                    number,
                    question: line.to_string(),
                    answer: None,
                    explanation: String::new(),
                };
                i += 1;

                if let Some(LineKind::Answer(answer)) =
                    lines.get(i).map(|next| classifier.classify(next))
                {
                    entry.answer = Some(answer);
                    let (explanation, consumed) =
                        join_until_boundary("", &lines[i + 1..], classifier);
                    entry.explanation = explanation;
                    i += 1 + consumed;
                }

                entries.push(entry);
            }
            _ => i += 1,
        }
    }

    ParseReport { entries }
}

/// Parse normalized text into the questions of a quiz run.
pub fn parse(text: &str, classifier: &Classifier) -> Vec<Question> {
    parse_entries(text, classifier).questions()
}
