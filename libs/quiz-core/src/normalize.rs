//! Normalizer for raw question files.
//!
//! Raw files wrap questions and explanations over several lines. The
//! normalizer produces one logical line per question, one per answer token
//! and one per explanation:
//!
//! ```text
//! CUESTIONES GENERALES          CUESTIONES GENERALES
//! 1.- Si P implica Q            1.- Si P implica Q entonces no-Q implica no-P
//! entonces no-Q implica no-P => Verdadero
//! Verdadero                     Es la contraposición.
//! Es la
//! contraposición.
//! ```

use crate::classify::{Classifier, LineKind};

/// Normalize raw quiz text. Every output line ends with `\n`.
pub fn normalize(input: &str, classifier: &Classifier) -> String {
    let lines: Vec<&str> = input.lines().collect();
    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim_end();

        match classifier.classify(line) {
            LineKind::QuestionStart { .. } => {
                let (joined, next) = join_until_boundary(line, &lines[i + 1..], classifier);
                output.push(joined);
                i += 1 + next;
            }
            LineKind::Answer(_) => {
                output.push(line.to_string());
                let (explanation, next) = join_until_boundary("", &lines[i + 1..], classifier);
                if !explanation.is_empty() {
                    output.push(explanation);
                }
                i += 1 + next;
            }
            _ => {
                output.push(line.to_string());
                i += 1;
            }
        }
    }

    let mut text = output.join("\n");
    if !output.is_empty() {
        text.push('\n');
    }
    text
}

/// Append continuation lines to `head` until a boundary line. Returns the
/// joined text and the number of lines consumed.
pub(crate) fn join_until_boundary(head: &str, rest: &[&str], classifier: &Classifier) -> (String, usize) {
    let mut joined = head.to_string();
    let mut consumed = 0;

    for line in rest {
        match classifier.classify(line) {
            kind if kind.is_boundary() => break,
            LineKind::Blank => {}
            _ => {
                if !joined.is_empty() {
                    joined.push(' ');
                }
                joined.push_str(line.trim());
            }
        }
        consumed += 1;
    }

    (joined, consumed)
}
