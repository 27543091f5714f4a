//! Normalizer and exporter tests.

mod common;

use common::fixtures;
use common::TestContext;
use logic_quiz::commands::export::{export_file, ExportSummary};
use logic_quiz::commands::normalize::normalize_file;
use logic_quiz::commands::quiz::QuizOutcome;
use logic_quiz::session::SessionEnd;
use logic_quiz::AppError;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;

/// Test the raw file is normalized into one line per unit.
#[test]
fn test_normalize_file() {
    let ctx = TestContext::with_raw(fixtures::RAW_TEXT);

    let lines = normalize_file(&ctx.config).unwrap();
    let processed = fs::read_to_string(&ctx.config.processed_path).unwrap();

    let expected = "\
TEORÍA LÓGICA I

CUESTIONES GENERALES
1.- Si P implica Q, entonces no-Q implica no-P
Verdadero
Es la ley de contraposición.
2.- Toda fórmula es satisfacible
Falso.
Las contradicciones no lo son.
CUESTIONES SOBRE TABLAS DE VERDAD
1.- Con tres variables hay ocho filas
Verdadero
3.- Pregunta sin respuesta que sigue aquí
";
    assert_eq!(processed, expected);
    assert_eq!(lines, 13);
}

/// Test normalizing the processed file again leaves it unchanged.
#[test]
fn test_normalize_is_idempotent() {
    let ctx = TestContext::with_raw(fixtures::RAW_TEXT);
    normalize_file(&ctx.config).unwrap();
    let first = fs::read_to_string(&ctx.config.processed_path).unwrap();

    fs::write(&ctx.config.raw_path, &first).unwrap();
    normalize_file(&ctx.config).unwrap();
    let second = fs::read_to_string(&ctx.config.processed_path).unwrap();

    assert_eq!(first, second);
}

/// Test a missing raw file is reported with its path.
#[test]
fn test_normalize_missing_file() {
    let ctx = TestContext::new();
    let err = normalize_file(&ctx.config).unwrap_err();

    assert!(matches!(err, AppError::File { .. }));
    assert!(err.to_string().contains("preguntas.txt"));
}

/// Test the export file holds every question, unanswered ones with null.
#[test]
fn test_export_file() {
    let ctx = TestContext::with_processed(fixtures::PROCESSED_TEXT);

    let summary = export_file(&ctx.config).unwrap();
    assert_eq!(
        summary,
        ExportSummary {
            exported: 4,
            unanswered: 1,
        }
    );

    let content = fs::read_to_string(&ctx.config.export_path).unwrap();
    assert!(content.contains("Esto es una explicación."));

    let exported: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        exported[0],
        json!({
            "section": "CUESTIONES GENERALES",
            "number": 1,
            "question": "1.- P implica Q",
            "answer": "Verdadero",
            "explanation": "Esto es una explicación."
        })
    );
    assert_eq!(exported[1]["answer"], "Falso");
    assert_eq!(exported[2]["section"], "CUESTIONES SOBRE TABLAS DE VERDAD");
    assert_eq!(exported[3]["answer"], json!(null));
}

/// Test the full pipeline: raw file, normalize, then quiz.
#[test]
fn test_pipeline_to_quiz() {
    let ctx = TestContext::with_raw(fixtures::RAW_TEXT);
    normalize_file(&ctx.config).unwrap();

    let (outcome, output) = ctx.run("Q\n");

    assert_eq!(outcome, QuizOutcome::Finished(SessionEnd::Quit));
    assert!(output.contains("📚 CUESTIONES GENERALES\n1❓ 2❓\n"));
    assert!(output.contains("📚 CUESTIONES SOBRE TABLAS DE VERDAD\n1❓\n"));
    assert!(output.contains("Total: 3 |"));
}
