// src/view_models.rs

use crate::model::{Difficulty, Question};

/// Lo que la interfaz puede mostrar de una pregunta pendiente: nunca incluye
/// la respuesta correcta.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub id: String,
    pub text: String,
    pub options: Vec<String>, // vacío en texto libre
    pub difficulty: Difficulty,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.clone(),
            text: q.text.clone(),
            options: q.options.clone(),
            difficulty: q.difficulty,
        }
    }
}

impl QuestionView {
    pub fn heading(&self) -> String {
        format!("Pregunta (dificultad {}):", self.difficulty.level())
    }
}

/// Cabecera "Puntos | Dificultad"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreLine {
    pub score: u32,
    pub answered: u32,
    pub difficulty: Difficulty,
}

impl ScoreLine {
    pub fn label(&self) -> String {
        format!(
            "Puntos: {} / {} | Dificultad: {} ({})",
            self.score,
            self.answered,
            self.difficulty.level(),
            self.difficulty.label()
        )
    }
}
