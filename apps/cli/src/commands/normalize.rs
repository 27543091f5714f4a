//! Raw text to normalized text.

use super::{read_text, write_text};
use crate::config::Config;
use crate::error::Result;
use quiz_core::normalize;

/// Normalize the raw question file into the processed file. Returns the
/// number of lines written.
pub fn normalize_file(config: &Config) -> Result<usize> {
    let raw = read_text(&config.raw_path)?;
    let normalized = normalize(&raw, &config.classifier());
    write_text(&config.processed_path, &normalized)?;

    let lines = normalized.lines().count();
    tracing::info!(
        from = %config.raw_path.display(),
        to = %config.processed_path.display(),
        input_lines = raw.lines().count(),
        output_lines = lines,
        "normalized question file"
    );
    Ok(lines)
}
