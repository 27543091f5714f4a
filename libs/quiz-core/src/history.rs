//! Answer history.
//!
//! Stored as two lists of question indices written as strings:
//!
//! ```json
//! { "correct": ["0", "3"], "incorrect": ["1"] }
//! ```
//!
//! A correct answer moves a question into `correct` and out of `incorrect`.
//! A wrong answer only adds it to `incorrect`.

use crate::types::{Question, Status};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    #[serde(default, with = "index_strings")]
    correct: BTreeSet<usize>,
    #[serde(default, with = "index_strings")]
    incorrect: BTreeSet<usize>,
}

/// Aggregate counts over a question list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    /// Questions not yet answered correctly, failed ones included.
    pub pending: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.correct.is_empty() && self.incorrect.is_empty()
    }

    pub fn correct(&self) -> &BTreeSet<usize> {
        &self.correct
    }

    pub fn incorrect(&self) -> &BTreeSet<usize> {
        &self.incorrect
    }

    /// Status of a question index. Correct wins over incorrect.
    pub fn status(&self, index: usize) -> Status {
        if self.correct.contains(&index) {
            Status::Correct
        } else if self.incorrect.contains(&index) {
            Status::Incorrect
        } else {
            Status::Pending
        }
    }

    /// Record an answer and return the updated history.
    pub fn record_answer(mut self, index: usize, was_correct: bool) -> Self {
        if was_correct {
            self.correct.insert(index);
            self.incorrect.remove(&index);
        } else {
            self.incorrect.insert(index);
        }
        self
    }

    /// Questions not yet answered correctly, in document order.
    pub fn pending<'q>(&self, questions: &'q [Question]) -> Vec<&'q Question> {
        questions
            .iter()
            .filter(|q| !self.correct.contains(&q.index))
            .collect()
    }

    /// Whether every question has been answered correctly.
    pub fn is_complete(&self, questions: &[Question]) -> bool {
        questions.iter().all(|q| self.correct.contains(&q.index))
    }

    pub fn progress(&self, questions: &[Question]) -> Progress {
        let mut progress = Progress {
            total: questions.len(),
            ..Progress::default()
        };

        for question in questions {
            match self.status(question.index) {
                Status::Correct => progress.correct += 1,
                Status::Incorrect => progress.incorrect += 1,
                Status::Pending => {}
            }
        }
        progress.pending = progress.total - progress.correct;
        progress
    }
}

mod index_strings {
    use crate::error::ParseError;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeSet;

    pub fn serialize<S: Serializer>(set: &BTreeSet<usize>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(set.iter().map(|index| index.to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeSet<usize>, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|value| {
                value
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| D::Error::custom(ParseError::InvalidIndex(value.clone())))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Answer;
    use pretty_assertions::assert_eq;

    fn questions(count: usize) -> Vec<Question> {
        (0..count)
            .map(|index| Question {
                section: Some("CUESTIONES".to_string()),
                number: index as u32 + 1,
                question: format!("{}.- Pregunta", index + 1),
                answer: Answer::True,
                explanation: String::new(),
                index,
            })
            .collect()
    }

    #[test]
    fn wrong_answer_goes_to_incorrect_only() {
        let history = History::new().record_answer(3, false);
        assert!(history.incorrect().contains(&3));
        assert!(!history.correct().contains(&3));
        assert_eq!(history.status(3), Status::Incorrect);
    }

    #[test]
    fn correct_answer_clears_previous_failure() {
        let history = History::new()
            .record_answer(1, false)
            .record_answer(1, false)
            .record_answer(1, true);

        assert_eq!(history.status(1), Status::Correct);
        assert!(history.correct().intersection(history.incorrect()).next().is_none());
    }

    #[test]
    fn pending_and_completion() {
        let qs = questions(3);
        let history = History::new().record_answer(0, true).record_answer(2, false);

        let pending: Vec<usize> = history.pending(&qs).iter().map(|q| q.index).collect();
        assert_eq!(pending, vec![1, 2]);
        assert!(!history.is_complete(&qs));

        let history = history.record_answer(1, true).record_answer(2, true);
        assert!(history.pending(&qs).is_empty());
        assert!(history.is_complete(&qs));
    }

    #[test]
    fn progress_counts() {
        let qs = questions(4);
        let history = History::new()
            .record_answer(0, true)
            .record_answer(1, false)
            .record_answer(9, true);

        assert_eq!(
            history.progress(&qs),
            Progress {
                total: 4,
                correct: 1,
                incorrect: 1,
                pending: 3,
            }
        );
    }

    #[test]
    fn serializes_indices_as_strings() {
        let history = History::new()
            .record_answer(10, true)
            .record_answer(2, true)
            .record_answer(5, false);
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "correct": ["2", "10"], "incorrect": ["5"] })
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let history: History = serde_json::from_str("{}").unwrap();
        assert!(history.is_empty());

        let history: History = serde_json::from_str(r#"{"correct": ["4"]}"#).unwrap();
        assert_eq!(history.status(4), Status::Correct);
    }

    #[test]
    fn rejects_non_numeric_index() {
        let result = serde_json::from_str::<History>(r#"{"correct": ["uno"]}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid question index: uno"));
    }
}
