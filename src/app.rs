use crate::model::{AnswerMode, AppState, TriviaConfig};
use crate::session::{QuestionView, TriviaSession};
use crate::source::OpenTdbSource;

/// Estado de la interfaz: la partida en curso más lo que el jugador está
/// escribiendo o ha marcado.
pub struct TriviaApp {
    pub config: TriviaConfig,
    pub session: Option<TriviaSession<OpenTdbSource>>,
    pub input: String,
    pub selected_option: Option<usize>,
    pub message: String,
    pub confirm_reset: bool,
}

impl TriviaApp {
    pub fn new(config: TriviaConfig) -> Self {
        Self {
            config,
            session: None,
            input: String::new(),
            selected_option: None,
            message: String::new(),
            confirm_reset: false,
        }
    }

    pub fn state(&self) -> AppState {
        match &self.session {
            None => AppState::Welcome,
            Some(session) if session.is_game_over() => AppState::GameOver,
            Some(_) => AppState::Quiz,
        }
    }

    pub fn empezar_partida(&mut self, mode: AnswerMode) {
        self.clear_answer();
        self.message.clear();
        match OpenTdbSource::new(&self.config, mode) {
            Ok(source) => {
                let mut session = TriviaSession::new(source);
                session.start_game();
                self.session = Some(session);
            }
            Err(err) => {
                log::error!("No se pudo preparar el banco de preguntas: {err}");
                self.message = format!("⚠ {err}");
            }
        }
    }

    pub fn procesar_respuesta(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(view) = session.current_question() else {
            return;
        };

        let Some(answer) = answer_from_ui(&view, &self.input, self.selected_option) else {
            self.message = if view.options.is_empty() {
                "⚠ Debes escribir una respuesta antes de enviar.".into()
            } else {
                "⚠ Elige una opción antes de enviar.".into()
            };
            return;
        };

        session.submit_answer(&answer);
        self.message.clear();
        self.clear_answer();
    }

    pub fn reintentar(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.retry();
        }
    }

    /// Nueva partida en el mismo modo
    pub fn reiniciar_partida(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.reset();
        }
        self.clear_answer();
        self.message.clear();
        self.confirm_reset = false;
    }

    pub fn volver_al_menu(&mut self) {
        self.session = None;
        self.clear_answer();
        self.message.clear();
        self.confirm_reset = false;
    }

    fn clear_answer(&mut self) {
        self.input.clear();
        self.selected_option = None;
    }
}

/// Texto a enviar al motor: la opción marcada (opción múltiple) o lo escrito
/// (texto libre). None si el jugador todavía no ha respondido nada.
pub fn answer_from_ui(view: &QuestionView, input: &str, selected: Option<usize>) -> Option<String> {
    if view.options.is_empty() {
        if input.trim().is_empty() {
            None
        } else {
            Some(input.to_string())
        }
    } else {
        selected.and_then(|idx| view.options.get(idx)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn view(options: &[&str]) -> QuestionView {
        QuestionView {
            id: "History-easy-Q".to_string(),
            text: "Q".to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn free_text_needs_non_blank_input() {
        let v = view(&[]);
        assert_eq!(answer_from_ui(&v, "   ", None), None);
        assert_eq!(answer_from_ui(&v, " Napoleon ", None), Some(" Napoleon ".to_string()));
    }

    #[test]
    fn multiple_choice_sends_selected_option_text() {
        let v = view(&["Louis XIV", "Napoleon"]);
        assert_eq!(answer_from_ui(&v, "ignored", None), None);
        assert_eq!(answer_from_ui(&v, "", Some(1)), Some("Napoleon".to_string()));
        assert_eq!(answer_from_ui(&v, "", Some(7)), None);
    }

    #[test]
    fn new_app_starts_on_welcome_screen() {
        let app = TriviaApp::new(TriviaConfig::default());
        assert_eq!(app.state(), AppState::Welcome);
        assert!(app.session.is_none());
    }
}
