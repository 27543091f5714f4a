//! Runtime configuration.
//!
//! Every value has a default; environment variables (optionally loaded from
//! a `.env` file) override them:
//! - QUIZ_RAW_PATH: raw question text
//! - QUIZ_PROCESSED_PATH: normalized question text
//! - QUIZ_EXPORT_PATH: exported JSON questions
//! - QUIZ_HISTORY_PATH: answer history (default `~/.logic_quiz_history.json`)
//! - QUIZ_GRID_COLUMNS: cells per row in the progress grid
//! - QUIZ_SECTION_MARKER: prefix that opens a section header
//! - QUIZ_CLEAR_SCREEN: `0` or `false` keeps previous output on screen

use crate::error::{AppError, Result};
use quiz_core::classify::DEFAULT_SECTION_MARKER;
use quiz_core::{Classifier, GridStyle};
use std::path::PathBuf;

pub const DEFAULT_RAW_PATH: &str = "data/TEORÍA LÓGICA I - preguntas.txt";
pub const DEFAULT_PROCESSED_PATH: &str = "data/TEORÍA LÓGICA I - preguntas.processed.txt";
pub const DEFAULT_EXPORT_PATH: &str = "public/questions.json";
const HISTORY_FILE_NAME: &str = ".logic_quiz_history.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub raw_path: PathBuf,
    pub processed_path: PathBuf,
    pub export_path: PathBuf,
    pub history_path: PathBuf,
    pub section_marker: String,
    pub grid: GridStyle,
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            raw_path: PathBuf::from(DEFAULT_RAW_PATH),
            processed_path: PathBuf::from(DEFAULT_PROCESSED_PATH),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            history_path: default_history_path(),
            section_marker: DEFAULT_SECTION_MARKER.to_string(),
            grid: GridStyle::default(),
            clear_screen: true,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup("QUIZ_RAW_PATH") {
            config.raw_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("QUIZ_PROCESSED_PATH") {
            config.processed_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("QUIZ_EXPORT_PATH") {
            config.export_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("QUIZ_HISTORY_PATH") {
            config.history_path = PathBuf::from(path);
        }
        if let Some(marker) = lookup("QUIZ_SECTION_MARKER") {
            config.section_marker = marker;
        }
        if let Some(columns) = lookup("QUIZ_GRID_COLUMNS") {
            config.grid.columns = columns
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|c| *c > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "QUIZ_GRID_COLUMNS must be a positive integer, got {:?}",
                        columns
                    ))
                })?;
        }
        if let Some(flag) = lookup("QUIZ_CLEAR_SCREEN") {
            config.clear_screen = parse_flag(&flag).ok_or_else(|| {
                AppError::Config(format!("QUIZ_CLEAR_SCREEN must be a boolean, got {:?}", flag))
            })?;
        }

        Ok(config)
    }

    /// Line classifier for the configured section marker.
    pub fn classifier(&self) -> Classifier {
        Classifier::new(&self.section_marker)
    }
}

fn default_history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(HISTORY_FILE_NAME)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
