use crate::model::{AnswerMode, Question};

pub mod opentdb;

pub use opentdb::OpenTdbSource;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("error de red al pedir preguntas: {0}")]
    Network(String),
    #[error("el banco de preguntas respondió con código {0}")]
    Api(u32),
    #[error("respuesta inválida del banco de preguntas: {0}")]
    Decode(String),
}

/// Origen de preguntas. `fetch` recibe el nivel numérico tal cual; un nivel
/// fuera de 1..=3 devuelve un lote vacío, no un error.
pub trait QuestionSource {
    fn fetch(&self, level: u8) -> Result<Vec<Question>, FetchError>;

    fn answer_mode(&self) -> AnswerMode;
}
