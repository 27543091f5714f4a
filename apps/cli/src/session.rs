//! Interactive quiz loop.
//!
//! ```text
//! ShowGrid -> PickPending -> Ask -> AfterAnswer -> Ask ... -> ShowGrid
//!                  |                     |
//!                  v                     v
//!                 Done                  Exit
//! ```
//!
//! History is threaded through every step as a value; it is persisted after
//! each answer and removed once every question has been answered correctly.

use crate::config::Config;
use crate::console::Console;
use crate::error::Result;
use crate::store::HistoryRepository;
use quiz_core::{render_grid, Answer, History, Question};
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::{BufRead, Write};

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every question was answered correctly; history has been removed.
    Completed,
    /// The user quit (or input ended) before finishing.
    Quit,
}

enum State<'q> {
    ShowGrid,
    PickPending,
    Ask {
        queue: Vec<&'q Question>,
        position: usize,
    },
    AfterAnswer {
        queue: Vec<&'q Question>,
        position: usize,
    },
    Done,
    Exit,
}

pub struct QuizSession<'a, S, R, W, G> {
    questions: &'a [Question],
    config: &'a Config,
    store: &'a S,
    console: Console<R, W>,
    rng: G,
}

impl<'a, S, R, W, G> QuizSession<'a, S, R, W, G>
where
    S: HistoryRepository,
    R: BufRead,
    W: Write,
    G: Rng,
{
    pub fn new(
        questions: &'a [Question],
        config: &'a Config,
        store: &'a S,
        console: Console<R, W>,
        rng: G,
    ) -> Self {
        Self {
            questions,
            config,
            store,
            console,
            rng,
        }
    }

    /// Drive the quiz until completion or quit.
    pub fn run(mut self, history: History) -> Result<SessionEnd> {
        let mut state = State::ShowGrid;
        let mut history = history;

        loop {
            let (next, updated) = self.step(state, history)?;
            history = updated;

            match next {
                State::Done => return Ok(SessionEnd::Completed),
                State::Exit => {
                    self.console.say("¡Hasta luego!")?;
                    return Ok(SessionEnd::Quit);
                }
                other => state = other,
            }
        }
    }

    fn step(&mut self, state: State<'a>, history: History) -> Result<(State<'a>, History)> {
        let next = match state {
            State::ShowGrid => {
                self.console.clear()?;
                if self.show_grid(&history)? {
                    State::PickPending
                } else {
                    State::Exit
                }
            }
            State::PickPending => {
                if history.is_complete(self.questions) {
                    self.store.clear()?;
                    let done = &self.config.grid.glyphs.done;
                    self.console.say(&format!(
                        "\n{} ¡Has respondido todas las preguntas correctamente!",
                        done
                    ))?;
                    tracing::info!(total = self.questions.len(), "quiz completed");
                    State::Done
                } else {
                    let mut queue = history.pending(self.questions);
                    queue.shuffle(&mut self.rng);
                    tracing::debug!(pending = queue.len(), "starting pass");
                    State::Ask { queue, position: 0 }
                }
            }
            State::Ask { queue, position } => match queue.get(position).copied() {
                None => State::ShowGrid,
                Some(question) => match self.ask(question, &history)? {
                    None => State::Exit,
                    Some(answer) => {
                        let history = self.record(question, answer, history)?;
                        return Ok((State::AfterAnswer { queue, position }, history));
                    }
                },
            },
            State::AfterAnswer { queue, position } => {
                let reply = self.console.prompt(
                    "Pulsa ENTER para continuar, E para ver el estado, o Q para salir...\n",
                )?;
                match reply.as_deref() {
                    None | Some("Q") => State::Exit,
                    Some("E") => {
                        self.console.clear()?;
                        if self.show_grid(&history)? {
                            State::Ask {
                                queue,
                                position: position + 1,
                            }
                        } else {
                            State::Exit
                        }
                    }
                    Some(_) => State::Ask {
                        queue,
                        position: position + 1,
                    },
                }
            }
            terminal @ (State::Done | State::Exit) => terminal,
        };

        Ok((next, history))
    }

    /// Print the grid and wait. Returns `false` if the user asked to quit.
    fn show_grid(&mut self, history: &History) -> Result<bool> {
        let grid = render_grid(self.questions, history, &self.config.grid);
        self.console.say(&grid)?;

        let reply = self
            .console
            .prompt("Pulsa ENTER para continuar, o Q para salir...\n")?;
        Ok(!matches!(reply.as_deref(), None | Some("Q")))
    }

    /// Present a question and read `V` or `F`. `None` means quit.
    fn ask(&mut self, question: &Question, history: &History) -> Result<Option<Answer>> {
        let glyphs = &self.config.grid.glyphs;
        let progress = history.progress(self.questions);

        self.console.clear()?;
        self.console.say(&format!(
            "{} {}/{} correctas | {} falladas | {} pendientes",
            glyphs.progress, progress.correct, progress.total, progress.incorrect, progress.pending
        ))?;
        self.console
            .say(&format!("\n{} {}", glyphs.section, question.section_label()))?;
        self.console
            .say(&format!("{} {}", glyphs.question, question.question))?;

        let mut reply = self.console.prompt(&format!(
            "{} ¿Verdadero (V) o Falso (F)? {} (Q para salir) ",
            glyphs.pending, glyphs.input
        ))?;

        loop {
            match reply.as_deref() {
                None | Some("Q") => return Ok(None),
                Some(text) => {
                    if let Some(answer) = Answer::from_letter(text) {
                        return Ok(Some(answer));
                    }
                }
            }
            reply = self.console.prompt(&format!(
                "Por favor, responde con V o F: {} (Q para salir) ",
                self.config.grid.glyphs.input
            ))?;
        }
    }

    fn record(&mut self, question: &Question, answer: Answer, history: History) -> Result<History> {
        let glyphs = &self.config.grid.glyphs;
        let was_correct = answer == question.answer;
        let history = history.record_answer(question.index, was_correct);
        self.store.save(&history)?;

        tracing::debug!(index = question.index, was_correct, "answer recorded");

        let verdict = if was_correct {
            format!("{} ¡Correcto! {}", glyphs.correct, question.explanation)
        } else {
            format!("{} Incorrecto. {}", glyphs.incorrect, question.explanation)
        };
        self.console.say(verdict.trim_end())?;
        Ok(history)
    }
}
