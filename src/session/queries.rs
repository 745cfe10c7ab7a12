use super::*;

impl<S: QuestionSource> TriviaSession<S> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Respuestas corregidas en esta partida
    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn score_line(&self) -> ScoreLine {
        ScoreLine {
            score: self.score,
            answered: self.answered,
            difficulty: self.current_difficulty,
        }
    }

    pub fn current_difficulty(&self) -> Difficulty {
        self.current_difficulty
    }

    pub fn answer_mode(&self) -> AnswerMode {
        self.mode
    }

    /// La pregunta en pantalla, sin la respuesta correcta.
    pub fn current_question(&self) -> Option<QuestionView> {
        self.current_question.as_ref().map(QuestionView::from)
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn asked_count(&self) -> usize {
        self.asked_ids.len()
    }

    pub fn was_asked(&self, id: &str) -> bool {
        self.asked_ids.contains(id)
    }

    pub fn pool_len(&self, difficulty: Difficulty) -> usize {
        self.pools.get(&difficulty).map_or(0, Vec::len)
    }
}
