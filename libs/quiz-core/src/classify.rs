//! Line classification.
//!
//! Every line of quiz text is tagged by running a fixed, ordered list of
//! rules; the first rule that matches wins:
//!
//! 1. section header (marker prefix or all-uppercase line)
//! 2. question start (`12.- ...`, `12. ...`, `12- ...`)
//! 3. answer token (`Verdadero` / `Falso`, optional period)
//! 4. blank
//!
//! Anything else is plain text.

use crate::types::Answer;

/// Marker that opens every section header in the question files.
pub const DEFAULT_SECTION_MARKER: &str = "CUESTIONES";

/// Punctuation ignored when deciding whether a line is an uppercase header.
const HEADER_PUNCTUATION: &[char] = &[
    '.', ',', ':', ';', '¿', '¡', '!', '?', '(', ')', '"', '\'', '-', '_', '/',
];

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Section,
    QuestionStart { number: u32 },
    Answer(Answer),
    Blank,
    Plain,
}

impl LineKind {
    /// Whether this line ends a question or explanation being joined.
    pub fn is_boundary(self) -> bool {
        matches!(
            self,
            Self::Section | Self::QuestionStart { .. } | Self::Answer(_)
        )
    }
}

type Rule = fn(&Classifier, &str) -> Option<LineKind>;

const RULES: [Rule; 4] = [
    Classifier::section,
    Classifier::question_start,
    Classifier::answer,
    Classifier::blank,
];

/// Ordered line classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    section_marker: String,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION_MARKER)
    }
}

impl Classifier {
    /// Create a classifier recognising `section_marker` (case-insensitive)
    /// as a section header prefix.
    pub fn new(section_marker: &str) -> Self {
        Self {
            section_marker: section_marker.trim().to_uppercase(),
        }
    }

    /// Classify a line. Leading and trailing whitespace is ignored.
    pub fn classify(&self, line: &str) -> LineKind {
        let trimmed = line.trim();
        RULES
            .iter()
            .find_map(|rule| rule(self, trimmed))
            .unwrap_or(LineKind::Plain)
    }

    fn section(&self, line: &str) -> Option<LineKind> {
        let has_marker =
            !self.section_marker.is_empty() && line.to_uppercase().starts_with(&self.section_marker);
        let is_header = is_uppercase_header(line) && question_number(line).is_none();

        (has_marker || is_header).then_some(LineKind::Section)
    }

    fn question_start(&self, line: &str) -> Option<LineKind> {
        question_number(line).map(|number| LineKind::QuestionStart { number })
    }

    fn answer(&self, line: &str) -> Option<LineKind> {
        line.parse::<Answer>().ok().map(LineKind::Answer)
    }

    fn blank(&self, line: &str) -> Option<LineKind> {
        line.is_empty().then_some(LineKind::Blank)
    }
}

/// An uppercase header has at least one letter once punctuation and
/// whitespace are removed, and nothing but uppercase letters and digits.
fn is_uppercase_header(line: &str) -> bool {
    let rest: Vec<char> = line
        .chars()
        .filter(|c| !c.is_whitespace() && !HEADER_PUNCTUATION.contains(c))
        .collect();

    rest.iter().any(|c| c.is_alphabetic())
        && rest
            .iter()
            .all(|c| c.is_ascii_digit() || (c.is_alphabetic() && c.is_uppercase()))
}

/// Number of a question-start line: leading digits, optional whitespace,
/// then `.` or `-` not followed by another digit.
fn question_number(line: &str) -> Option<u32> {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }

    let rest = line[digits_end..].trim_start();
    let after = rest.strip_prefix('.').or_else(|| rest.strip_prefix('-'))?;
    if after.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    line[..digits_end].parse::<u32>().ok().filter(|n| *n > 0)
}
