use serde::Deserialize;

/// Nivel de dificultad. El valor numérico (1..=3) es el que ve el jugador.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: u8) -> Option<Difficulty> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Siguiente nivel, o None si ya estamos en el máximo.
    pub fn next(self) -> Option<Difficulty> {
        Difficulty::from_level(self.level() + 1)
    }

    /// Vocabulario de la API remota
    pub fn api_name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Media",
            Difficulty::Hard => "Difícil",
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMode {
    MultipleChoice,
    FreeText,
}

impl Default for AnswerMode {
    fn default() -> Self {
        AnswerMode::MultipleChoice
    }
}

/// Pregunta ya normalizada. No se modifica después de crearse.
///
/// `id` se deriva de categoría + dificultad + texto, así que no es único de verdad:
/// dos preguntas distintas con el mismo texto y metadatos colisionan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,          // Enunciado
    pub correct_answer: String,
    pub options: Vec<String>,  // Vacío en modo texto libre
    pub difficulty: Difficulty,
}

impl Question {
    pub fn make_id(category: &str, difficulty: &str, text: &str) -> String {
        format!("{category}-{difficulty}-{text}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    AwaitingAnswer,
    GameOver,
}

/// Pantalla que dibuja la interfaz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    GameOver,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TriviaConfig {
    pub endpoint: String,
    pub category_id: u32,
    pub batch_size: u32,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub answer_mode: AnswerMode,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://opentdb.com/api.php".to_string(),
            category_id: 23,
            batch_size: 10,
            timeout_secs: 10,
            user_agent: format!("HistoryTrivia/{}", env!("CARGO_PKG_VERSION")),
            answer_mode: AnswerMode::MultipleChoice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_steps_are_capped_at_hard() {
        assert_eq!(Difficulty::Easy.next(), Some(Difficulty::Medium));
        assert_eq!(Difficulty::Medium.next(), Some(Difficulty::Hard));
        assert_eq!(Difficulty::Hard.next(), None);
    }

    #[test]
    fn only_three_levels_are_supported() {
        assert_eq!(Difficulty::from_level(0), None);
        assert_eq!(Difficulty::from_level(4), None);
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_level(d.level()), Some(d));
        }
    }

    #[test]
    fn id_joins_category_difficulty_and_text() {
        let id = Question::make_id("History", "easy", "Who was the first emperor?");
        assert_eq!(id, "History-easy-Who was the first emperor?");
    }

    #[test]
    fn answer_mode_reads_snake_case_names() {
        let mode: AnswerMode = serde_yaml::from_str("free_text").unwrap();
        assert_eq!(mode, AnswerMode::FreeText);
        let mode: AnswerMode = serde_yaml::from_str("multiple_choice").unwrap();
        assert_eq!(mode, AnswerMode::MultipleChoice);
    }
}
