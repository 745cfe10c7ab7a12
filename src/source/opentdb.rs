use super::{FetchError, QuestionSource};
use crate::model::{AnswerMode, Difficulty, Question, TriviaConfig};
use rand::seq::SliceRandom;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

// Siempre pedimos el formato de opción múltiple; en texto libre se descartan
// las opciones incorrectas.
const QUESTION_TYPE: &str = "multiple";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    response_code: u32,
    #[serde(default)]
    results: Vec<ApiQuestion>,
}

#[derive(Debug, Deserialize)]
struct ApiQuestion {
    category: String,
    difficulty: String,
    question: String,
    correct_answer: String,
    #[serde(default)]
    incorrect_answers: Vec<String>,
}

fn decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

fn to_question(raw: ApiQuestion, difficulty: Difficulty, mode: AnswerMode) -> Question {
    let text = decode(&raw.question);
    let correct_answer = decode(&raw.correct_answer);

    let options = match mode {
        AnswerMode::MultipleChoice => {
            let mut options: Vec<String> =
                raw.incorrect_answers.iter().map(|a| decode(a)).collect();
            options.push(correct_answer.clone());
            options.shuffle(&mut rand::thread_rng());
            options
        }
        AnswerMode::FreeText => Vec::new(),
    };

    Question {
        id: Question::make_id(&raw.category, &raw.difficulty, &text),
        text,
        correct_answer,
        options,
        difficulty,
    }
}

/// Decodifica el cuerpo JSON de la API. `response_code` distinto de 0 es un
/// error de la fuente (p. ej. 1 = no hay resultados para esa combinación).
pub fn parse_response(
    body: &str,
    difficulty: Difficulty,
    mode: AnswerMode,
) -> Result<Vec<Question>, FetchError> {
    let response: ApiResponse =
        serde_json::from_str(body).map_err(|err| FetchError::Decode(err.to_string()))?;

    if response.response_code != 0 {
        return Err(FetchError::Api(response.response_code));
    }

    Ok(response
        .results
        .into_iter()
        .map(|raw| to_question(raw, difficulty, mode))
        .collect())
}

pub struct OpenTdbSource {
    client: Client,
    endpoint: String,
    category_id: u32,
    batch_size: u32,
    mode: AnswerMode,
}

impl OpenTdbSource {
    pub fn new(config: &TriviaConfig, mode: AnswerMode) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| FetchError::Network(format!("no se pudo crear el cliente HTTP: {err}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            category_id: config.category_id,
            batch_size: config.batch_size,
            mode,
        })
    }

    fn query_for(&self, difficulty: Difficulty) -> [(&'static str, String); 4] {
        [
            ("amount", self.batch_size.to_string()),
            ("category", self.category_id.to_string()),
            ("difficulty", difficulty.api_name().to_string()),
            ("type", QUESTION_TYPE.to_string()),
        ]
    }
}

impl QuestionSource for OpenTdbSource {
    fn fetch(&self, level: u8) -> Result<Vec<Question>, FetchError> {
        let Some(difficulty) = Difficulty::from_level(level) else {
            log::debug!("Nivel {level} no soportado, lote vacío");
            return Ok(Vec::new());
        };

        log::debug!(
            "Pidiendo {} preguntas ({}) a {}",
            self.batch_size,
            difficulty.api_name(),
            self.endpoint
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&self.query_for(difficulty))
            .send()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Network(format!(
                "HTTP {} en {}",
                response.status(),
                self.endpoint
            )));
        }

        let body = response
            .text()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        parse_response(&body, difficulty, self.mode)
    }

    fn answer_mode(&self) -> AnswerMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_BODY: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "type": "multiple",
                "difficulty": "easy",
                "category": "History",
                "question": "Who was the first Emperor of the French?",
                "correct_answer": "Napoleon",
                "incorrect_answers": ["Louis XIV", "Charlemagne", "Clovis"]
            },
            {
                "type": "multiple",
                "difficulty": "easy",
                "category": "History",
                "question": "What was the name of the &quot;Iron Lady&quot;&#039;s party?",
                "correct_answer": "Conservative &amp; Unionist",
                "incorrect_answers": ["Labour", "Liberal", "Green"]
            }
        ]
    }"#;

    #[test]
    fn multiple_choice_options_include_correct_answer_once() {
        let questions = parse_response(OK_BODY, Difficulty::Easy, AnswerMode::MultipleChoice).unwrap();
        assert_eq!(questions.len(), 2);
        let first = &questions[0];
        assert_eq!(first.options.len(), 4);
        assert_eq!(
            first.options.iter().filter(|o| *o == "Napoleon").count(),
            1
        );
        assert!(first.options.iter().any(|o| o == "Clovis"));
        assert_eq!(first.difficulty, Difficulty::Easy);
    }

    #[test]
    fn html_entities_are_decoded() {
        let questions = parse_response(OK_BODY, Difficulty::Easy, AnswerMode::MultipleChoice).unwrap();
        let second = &questions[1];
        assert_eq!(second.text, "What was the name of the \"Iron Lady\"'s party?");
        assert_eq!(second.correct_answer, "Conservative & Unionist");
        assert!(second.options.iter().any(|o| o == "Conservative & Unionist"));
    }

    #[test]
    fn id_uses_raw_metadata_and_decoded_text() {
        let questions = parse_response(OK_BODY, Difficulty::Easy, AnswerMode::FreeText).unwrap();
        assert_eq!(
            questions[1].id,
            "History-easy-What was the name of the \"Iron Lady\"'s party?"
        );
    }

    #[test]
    fn free_text_discards_distractors() {
        let questions = parse_response(OK_BODY, Difficulty::Easy, AnswerMode::FreeText).unwrap();
        assert!(questions.iter().all(|q| q.options.is_empty()));
        assert_eq!(questions[0].correct_answer, "Napoleon");
    }

    #[test]
    fn non_zero_response_code_is_an_api_error() {
        let body = r#"{"response_code": 1, "results": []}"#;
        assert_eq!(
            parse_response(body, Difficulty::Hard, AnswerMode::MultipleChoice),
            Err(FetchError::Api(1))
        );
        // Algunas respuestas de error no traen `results`
        let body = r#"{"response_code": 5}"#;
        assert_eq!(
            parse_response(body, Difficulty::Hard, AnswerMode::MultipleChoice),
            Err(FetchError::Api(5))
        );
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let result = parse_response("<html>oops</html>", Difficulty::Easy, AnswerMode::FreeText);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn unsupported_level_returns_empty_batch_without_network() {
        let config = TriviaConfig {
            endpoint: "http://127.0.0.1:9/api.php".to_string(),
            ..TriviaConfig::default()
        };
        let source = OpenTdbSource::new(&config, AnswerMode::MultipleChoice).unwrap();
        assert_eq!(source.fetch(0), Ok(Vec::new()));
        assert_eq!(source.fetch(4), Ok(Vec::new()));
    }

    #[test]
    fn unreachable_server_is_a_network_error() {
        // Puerto 9 (discard) cerrado en local: la conexión se rechaza al momento
        let config = TriviaConfig {
            endpoint: "http://127.0.0.1:9/api.php".to_string(),
            timeout_secs: 1,
            ..TriviaConfig::default()
        };
        let source = OpenTdbSource::new(&config, AnswerMode::MultipleChoice).unwrap();
        let err = source.fetch(1).unwrap_err();
        assert!(matches!(err, FetchError::Network(_)), "{err:?}");
    }

    #[test]
    fn query_requests_fixed_batch_of_multiple_choice() {
        let source = OpenTdbSource::new(&TriviaConfig::default(), AnswerMode::FreeText).unwrap();
        let query = source.query_for(Difficulty::Medium);
        assert_eq!(query[0], ("amount", "10".to_string()));
        assert_eq!(query[1], ("category", "23".to_string()));
        assert_eq!(query[2], ("difficulty", "medium".to_string()));
        assert_eq!(query[3], ("type", "multiple".to_string()));
    }
}
