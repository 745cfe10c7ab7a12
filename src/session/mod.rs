use crate::model::{AnswerMode, Difficulty, Phase, Question};
use crate::source::{FetchError, QuestionSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashMap, HashSet};
use std::fmt;

// Submódulos
pub mod answers;
pub mod queries;
pub mod resets;
pub mod selection;

pub use crate::view_models::{QuestionView, ScoreLine};
pub use selection::Selection;

/// Estado informativo que deja la última selección de pregunta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// La fuente no trajo preguntas nuevas para `from` y se pasó a `to`
    AdvancedDifficulty { from: Difficulty, to: Difficulty },
    /// No se pudo pedir preguntas; el jugador puede reintentar
    FetchFailed(FetchError),
    /// No quedan preguntas en ningún nivel
    Exhausted,
}

impl Status {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Status::FetchFailed(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::AdvancedDifficulty { from, to } => write!(
                f,
                "No hay preguntas nuevas en dificultad {}. Pasamos a dificultad {} ({}).",
                from.label(),
                to.level(),
                to.label()
            ),
            Status::FetchFailed(err) => {
                write!(f, "No se pudieron cargar preguntas ({err}). Pulsa reintentar.")
            }
            Status::Exhausted => write!(
                f,
                "¡Has respondido todas las preguntas disponibles! Pulsa reiniciar para jugar otra vez."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { correct_answer: String },
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }

    pub fn message(&self) -> String {
        match self {
            Feedback::Correct => "✅ ¡Correcto!".to_string(),
            Feedback::Incorrect { correct_answer } => {
                format!("❌ Incorrecto. La respuesta correcta era: {correct_answer}")
            }
        }
    }
}

/// Partida de trivia: todo el estado de una sesión vive aquí y se descarta al
/// reiniciar. Una instancia por jugador.
pub struct TriviaSession<S: QuestionSource> {
    source: S,
    mode: AnswerMode,
    rng: StdRng,
    phase: Phase,
    current_difficulty: Difficulty,
    score: u32,
    answered: u32,
    asked_ids: HashSet<String>,
    pools: HashMap<Difficulty, Vec<Question>>,
    current_question: Option<Question>,
    status: Option<Status>,
    feedback: Option<Feedback>,
}

impl<S: QuestionSource> TriviaSession<S> {
    pub fn new(source: S) -> Self {
        Self::with_rng(source, StdRng::from_entropy())
    }

    /// Sesión con selección reproducible (tests, demos).
    pub fn with_seed(source: S, seed: u64) -> Self {
        Self::with_rng(source, StdRng::seed_from_u64(seed))
    }

    fn with_rng(source: S, rng: StdRng) -> Self {
        let mode = source.answer_mode();
        Self {
            source,
            mode,
            rng,
            phase: Phase::NotStarted,
            current_difficulty: Difficulty::Easy,
            score: 0,
            answered: 0,
            asked_ids: HashSet::new(),
            pools: HashMap::new(),
            current_question: None,
            status: None,
            feedback: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
