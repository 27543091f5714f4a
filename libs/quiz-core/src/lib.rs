//! Core library for the true/false logic quiz.
//!
//! Provides:
//! - Line classification shared by the normalizer and the parser
//! - Normalizer that joins wrapped source lines into logical lines
//! - Parser producing question records from normalized text
//! - Export records for the JSON question file
//! - Answer history with its correctness invariants
//! - Progress grid rendering

pub mod classify;
pub mod error;
pub mod export;
pub mod grid;
pub mod history;
pub mod normalize;
pub mod parser;
pub mod types;

pub use classify::{Classifier, LineKind};
pub use error::{ParseError, Result};
pub use export::{export_records, ExportRecord};
pub use grid::{render_grid, Glyphs, GridStyle};
pub use history::{History, Progress};
pub use normalize::normalize;
pub use parser::{parse, parse_entries, ParseReport};
pub use types::{Answer, ParsedEntry, Question, Status};
