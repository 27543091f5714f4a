//! Interactive quiz entry point.

use super::read_text;
use crate::config::Config;
use crate::console::Console;
use crate::error::Result;
use crate::session::{QuizSession, SessionEnd};
use crate::store::{HistoryRepository, JsonHistoryStore};
use quiz_core::parse_entries;
use rand::Rng;
use std::io::{BufRead, Write};

/// Result of a quiz invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    NoQuestions,
    Finished(SessionEnd),
}

impl QuizOutcome {
    /// Process exit code: 1 only when there was nothing to ask.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::NoQuestions => 1,
            Self::Finished(_) => 0,
        }
    }
}

/// Run the quiz over the processed question file using the file-backed
/// history store.
pub fn run_quiz<R, W, G>(config: &Config, input: R, output: W, rng: G) -> Result<QuizOutcome>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let store = JsonHistoryStore::new(&config.history_path);
    run_quiz_with_store(config, &store, input, output, rng)
}

/// Run the quiz against any history repository.
pub fn run_quiz_with_store<S, R, W, G>(
    config: &Config,
    store: &S,
    input: R,
    mut output: W,
    rng: G,
) -> Result<QuizOutcome>
where
    S: HistoryRepository,
    R: BufRead,
    W: Write,
    G: Rng,
{
    let text = read_text(&config.processed_path)?;
    let report = parse_entries(&text, &config.classifier());
    let questions = report.questions();

    tracing::info!(
        path = %config.processed_path.display(),
        questions = questions.len(),
        skipped = report.dropped(),
        "loaded questions"
    );

    if questions.is_empty() {
        writeln!(output, "No se encontraron preguntas en el archivo.")?;
        return Ok(QuizOutcome::NoQuestions);
    }

    let history = store.load()?;
    let console = Console::new(input, output, config.clear_screen);
    let end = QuizSession::new(&questions, config, store, console, rng).run(history)?;

    Ok(QuizOutcome::Finished(end))
}
