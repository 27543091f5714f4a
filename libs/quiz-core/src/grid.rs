//! Progress grid rendering.

use crate::history::History;
use crate::types::{Question, Status};

/// Symbols used by the terminal interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub correct: String,
    pub incorrect: String,
    pub pending: String,
    pub section: String,
    pub question: String,
    pub progress: String,
    pub input: String,
    pub done: String,
    pub review: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            correct: "✅".to_string(),
            incorrect: "❌".to_string(),
            pending: "❓".to_string(),
            section: "📚".to_string(),
            question: "📝".to_string(),
            progress: "📊".to_string(),
            input: "👉".to_string(),
            done: "🎉".to_string(),
            review: "🔎".to_string(),
        }
    }
}

impl Glyphs {
    pub fn status(&self, status: Status) -> &str {
        match status {
            Status::Correct => &self.correct,
            Status::Incorrect => &self.incorrect,
            Status::Pending => &self.pending,
        }
    }
}

/// Layout of the progress grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStyle {
    pub columns: usize,
    pub glyphs: Glyphs,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            columns: 5,
            glyphs: Glyphs::default(),
        }
    }
}

/// Render the status of every question, grouped by section in the order
/// sections are first seen, followed by a legend and totals.
pub fn render_grid(questions: &[Question], history: &History, style: &GridStyle) -> String {
    let glyphs = &style.glyphs;
    let columns = style.columns.max(1);
    let mut out = String::new();

    out.push_str(&format!("\n{} Estado de las preguntas:\n", glyphs.review));

    for (label, group) in group_by_section(questions) {
        out.push_str(&format!("\n{} {}\n", glyphs.section, label));

        let width = group
            .iter()
            .map(|q| q.number.to_string().len())
            .max()
            .unwrap_or(1);
        let cells: Vec<String> = group
            .iter()
            .map(|q| {
                let glyph = glyphs.status(history.status(q.index));
                format!("{:>width$}{}", q.number, glyph, width = width)
            })
            .collect();

        for row in cells.chunks(columns) {
            out.push_str(&row.join(" "));
            out.push('\n');
        }
    }

    let progress = history.progress(questions);
    out.push_str(&format!(
        "\n{} = Correcta   {} = Fallada   {} = Pendiente\n",
        glyphs.correct, glyphs.incorrect, glyphs.pending
    ));
    out.push_str(&format!(
        "{} Total: {} | Correctas: {} | Falladas: {} | Pendientes: {}\n",
        glyphs.progress, progress.total, progress.correct, progress.incorrect, progress.pending
    ));
    out
}

fn group_by_section(questions: &[Question]) -> Vec<(&str, Vec<&Question>)> {
    let mut groups: Vec<(&str, Vec<&Question>)> = Vec::new();

    for question in questions {
        let label = question.section_label();
        match groups.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, group)) => group.push(question),
            None => groups.push((label, vec![question])),
        }
    }
    groups
}
