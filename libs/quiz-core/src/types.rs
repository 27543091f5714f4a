//! Core types for the quiz.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Expected answer of a true/false question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    #[serde(rename = "Verdadero")]
    True,
    #[serde(rename = "Falso")]
    False,
}

impl Answer {
    /// Literal token used in the source text and the export file.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::True => "Verdadero",
            Self::False => "Falso",
        }
    }

    /// Parse a user-typed letter (`V` or `F`, any case).
    pub fn from_letter(input: &str) -> Option<Self> {
        match input.trim() {
            "V" | "v" => Some(Self::True),
            "F" | "f" => Some(Self::False),
            _ => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Parses an answer line: `Verdadero` or `Falso`, case-insensitive,
/// optionally followed by a single period.
impl FromStr for Answer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let word = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if word.eq_ignore_ascii_case("verdadero") {
            Ok(Self::True)
        } else if word.eq_ignore_ascii_case("falso") {
            Ok(Self::False)
        } else {
            Err(ParseError::UnknownAnswer(trimmed.to_string()))
        }
    }
}

/// Question-start line with whatever answer and explanation followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub section: Option<String>,
    pub number: u32,
    pub question: String,
    pub answer: Option<Answer>,
    pub explanation: String,
}

/// Question ready to be asked: it has a valid answer and a stable index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub section: Option<String>,
    pub number: u32,
    pub question: String,
    pub answer: Answer,
    pub explanation: String,
    pub index: usize,
}

impl Question {
    /// Section label for display.
    pub fn section_label(&self) -> &str {
        self.section.as_deref().unwrap_or("(sin sección)")
    }
}

/// Per-question status derived from history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Correct,
    Incorrect,
    Pending,
}

impl Default for Status {
    fn default() -> Self {
        Self::Pending
    }
}
