use super::*;

impl<S: QuestionSource> TriviaSession<S> {
    /// Vuelve al estado inicial (0 puntos, dificultad 1, sin historial) y
    /// sirve la primera pregunta.
    pub fn reset(&mut self) -> Selection {
        self.current_difficulty = Difficulty::Easy;
        self.score = 0;
        self.answered = 0;
        self.asked_ids.clear();
        self.pools.clear();
        self.current_question = None;
        self.status = None;
        self.feedback = None;
        self.phase = Phase::AwaitingAnswer;
        log::info!("Nueva partida ({:?})", self.mode);

        self.select_next()
    }

    pub fn start_game(&mut self) -> Selection {
        self.reset()
    }
}
