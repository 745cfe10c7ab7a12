use super::*;
use crate::answer_utils::grade;

impl<S: QuestionSource> TriviaSession<S> {
    /// Corrige la respuesta a la pregunta actual y pasa a la siguiente.
    ///
    /// Acierto: +1 punto y sube un nivel (máximo Difícil). Fallo: el nivel no
    /// cambia y el feedback lleva la respuesta correcta. Sin pregunta actual
    /// (falló la fuente) no se corrige nada y sólo se reintenta la selección.
    pub fn submit_answer(&mut self, input: &str) -> Option<Feedback> {
        if self.phase != Phase::AwaitingAnswer {
            return None;
        }
        self.status = None;

        let Some(question) = self.current_question.take() else {
            self.feedback = None;
            self.select_next();
            return None;
        };

        self.answered += 1;
        let feedback = if grade(self.mode, input, &question.correct_answer) {
            self.score += 1;
            if let Some(next) = self.current_difficulty.next() {
                self.current_difficulty = next;
            }
            Feedback::Correct
        } else {
            Feedback::Incorrect {
                correct_answer: question.correct_answer,
            }
        };
        log::debug!(
            "Respuesta {} (puntos: {}, dificultad: {})",
            if feedback.is_correct() { "correcta" } else { "incorrecta" },
            self.score,
            self.current_difficulty.level()
        );

        self.feedback = Some(feedback.clone());
        self.select_next();
        Some(feedback)
    }

    /// Reintenta la selección tras un fallo de la fuente.
    pub fn retry(&mut self) -> Selection {
        match (self.phase, &self.current_question) {
            (Phase::AwaitingAnswer, None) => {
                self.status = None;
                self.select_next()
            }
            (Phase::AwaitingAnswer, Some(_)) => Selection::Served,
            (Phase::GameOver, _) => Selection::GameOver,
            (Phase::NotStarted, _) => Selection::Unavailable,
        }
    }
}
