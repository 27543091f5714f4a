//! Entry points behind the binaries.

pub mod export;
pub mod normalize;
pub mod quiz;

use crate::error::{AppError, Result};
use std::fs;
use std::path::Path;

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| AppError::file(path, e))
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AppError::file(parent, e))?;
    }
    fs::write(path, content).map_err(|e| AppError::file(path, e))
}
