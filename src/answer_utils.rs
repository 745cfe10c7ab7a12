use crate::model::AnswerMode;

pub fn normalize_answer(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Opción múltiple: igualdad exacta con el texto de la respuesta correcta.
pub fn matches_choice(selected: &str, correct: &str) -> bool {
    selected == correct
}

/// Texto libre: igualdad tras normalizar, o bien la respuesta correcta aparece
/// dentro de lo escrito y lo escrito mide más de la mitad que la correcta.
///
/// Es un criterio laxo: una respuesta corta ("Roma") se acepta dentro de
/// cualquier frase larga que la contenga.
pub fn matches_free_text(input: &str, correct: &str) -> bool {
    let user = normalize_answer(input);
    let answer = normalize_answer(correct);
    if user == answer {
        return true;
    }
    user.contains(answer.as_str()) && user.chars().count() * 2 > answer.chars().count()
}

pub fn grade(mode: AnswerMode, input: &str, correct: &str) -> bool {
    match mode {
        AnswerMode::MultipleChoice => matches_choice(input, correct),
        AnswerMode::FreeText => matches_free_text(input, correct),
    }
}
