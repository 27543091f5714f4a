//! Answer history persistence.

use crate::error::{AppError, Result};
use quiz_core::History;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage for the answer history of a quiz.
pub trait HistoryRepository {
    /// Stored history, or an empty one if nothing has been saved.
    fn load(&self) -> Result<History>;

    /// Replace the stored history.
    fn save(&self, history: &History) -> Result<()>;

    /// Remove the stored history. Succeeds if there is none.
    fn clear(&self) -> Result<()>;
}

/// History kept as a single JSON file, rewritten on every save.
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryRepository for JsonHistoryStore {
    fn load(&self) -> Result<History> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no history file, starting fresh");
                return Ok(History::new());
            }
            Err(e) => return Err(AppError::file(&self.path, e)),
        };

        serde_json::from_str(&content).map_err(|source| AppError::History {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, history: &History) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| AppError::file(parent, e))?;
        }

        let mut json = serde_json::to_string_pretty(history)?;
        json.push('\n');
        fs::write(&self.path, json).map_err(|e| AppError::file(&self.path, e))?;

        tracing::debug!(
            path = %self.path.display(),
            correct = history.correct().len(),
            incorrect = history.incorrect().len(),
            "history saved"
        );
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "history removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::file(&self.path, e)),
        }
    }
}
