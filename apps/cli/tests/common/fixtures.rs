//! Sample question files.

/// Raw file as typed from the course notes, with wrapped lines.
pub const RAW_TEXT: &str = "\
TEORÍA LÓGICA I

CUESTIONES GENERALES
1.- Si P implica Q, entonces
no-Q implica no-P
Verdadero
Es la ley de
contraposición.

2.- Toda fórmula
es satisfacible
Falso.
Las contradicciones no lo son.
CUESTIONES SOBRE TABLAS DE VERDAD
1.- Con tres variables
hay ocho filas
Verdadero
3.- Pregunta sin respuesta
que sigue aquí
";

/// Normalized file with two sections and one unanswered question.
pub const PROCESSED_TEXT: &str = "\
CUESTIONES GENERALES
1.- P implica Q
Verdadero
Esto es una explicación.
2.- Toda fórmula es satisfacible
Falso
Las contradicciones no lo son.
CUESTIONES SOBRE TABLAS DE VERDAD
1.- Con tres variables hay ocho filas
Verdadero
3.- Pregunta sin respuesta
";

/// Normalized file of `count` questions whose answer is always `Verdadero`.
pub fn all_true(count: usize) -> String {
    let mut text = String::from("CUESTIONES GENERALES\n");
    for n in 1..=count {
        text.push_str(&format!("{n}.- Pregunta número {n}\nVerdadero\nExplicación {n}.\n"));
    }
    text
}

/// Scripted input answering `V` to `count` questions, then the final grid.
pub fn answer_all_true(count: usize) -> String {
    let mut input = String::from("\n");
    for _ in 0..count {
        input.push_str("V\n\n");
    }
    input.push('\n');
    input
}
