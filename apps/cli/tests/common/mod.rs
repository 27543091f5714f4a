//! Common test utilities for the quiz integration tests.
//!
//! - TestContext: temporary directory with a config pointing into it
//! - MemoryHistoryStore: in-memory history repository that counts saves
//! - fixtures: sample question files

#![allow(dead_code)]

pub mod fixtures;

use std::cell::{Cell, RefCell};
use std::fs;
use std::io::Cursor;

use logic_quiz::commands::quiz::{run_quiz, run_quiz_with_store, QuizOutcome};
use logic_quiz::store::HistoryRepository;
use logic_quiz::Config;
use quiz_core::History;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

/// Temporary workspace with every configured path inside it.
pub struct TestContext {
    pub dir: TempDir,
    pub config: Config,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config {
            raw_path: dir.path().join("data").join("preguntas.txt"),
            processed_path: dir.path().join("data").join("preguntas.processed.txt"),
            export_path: dir.path().join("public").join("questions.json"),
            history_path: dir.path().join("history.json"),
            clear_screen: false,
            ..Config::default()
        };
        Self { dir, config }
    }

    /// Context whose processed file holds `text`.
    pub fn with_processed(text: &str) -> Self {
        let ctx = Self::new();
        write_file(&ctx.config.processed_path, text);
        ctx
    }

    /// Context whose raw file holds `text`.
    pub fn with_raw(text: &str) -> Self {
        let ctx = Self::new();
        write_file(&ctx.config.raw_path, text);
        ctx
    }

    /// Run the quiz with scripted input and a seeded shuffle.
    pub fn run(&self, input: &str) -> (QuizOutcome, String) {
        self.run_bytes(input.as_bytes())
    }

    /// Run the quiz with raw input bytes, which need not be UTF-8.
    pub fn run_bytes(&self, input: &[u8]) -> (QuizOutcome, String) {
        let mut output = Vec::new();
        let outcome = run_quiz(
            &self.config,
            Cursor::new(input.to_vec()),
            &mut output,
            StdRng::seed_from_u64(7),
        )
        .expect("quiz failed");
        (outcome, String::from_utf8(output).expect("utf-8 output"))
    }

    /// Run the quiz against an in-memory store.
    pub fn run_with_store(&self, store: &MemoryHistoryStore, input: &str) -> (QuizOutcome, String) {
        let mut output = Vec::new();
        let outcome = run_quiz_with_store(
            &self.config,
            store,
            Cursor::new(input.to_string()),
            &mut output,
            StdRng::seed_from_u64(11),
        )
        .expect("quiz failed");
        (outcome, String::from_utf8(output).expect("utf-8 output"))
    }

    /// Parsed history file, if it exists.
    pub fn history_json(&self) -> Option<serde_json::Value> {
        let content = fs::read_to_string(&self.config.history_path).ok()?;
        Some(serde_json::from_str(&content).expect("history is valid JSON"))
    }

    pub fn write_history(&self, json: &str) {
        write_file(&self.config.history_path, json);
    }
}

fn write_file(path: &std::path::Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// History repository kept in memory.
#[derive(Default)]
pub struct MemoryHistoryStore {
    pub stored: RefCell<Option<History>>,
    pub saves: Cell<usize>,
    pub cleared: Cell<bool>,
}

impl MemoryHistoryStore {
    pub fn with_history(history: History) -> Self {
        Self {
            stored: RefCell::new(Some(history)),
            ..Self::default()
        }
    }
}

impl HistoryRepository for MemoryHistoryStore {
    fn load(&self) -> logic_quiz::Result<History> {
        Ok(self.stored.borrow().clone().unwrap_or_default())
    }

    fn save(&self, history: &History) -> logic_quiz::Result<()> {
        *self.stored.borrow_mut() = Some(history.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn clear(&self) -> logic_quiz::Result<()> {
        *self.stored.borrow_mut() = None;
        self.cleared.set(true);
        Ok(())
    }
}
