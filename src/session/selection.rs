use super::*;
use rand::Rng;

/// Resultado de una selección.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Served,
    /// Falló la fuente; la partida sigue abierta sin pregunta
    Unavailable,
    GameOver,
}

impl<S: QuestionSource> TriviaSession<S> {
    /// Elige la siguiente pregunta. Como mucho una vuelta por nivel: si un
    /// nivel no tiene nada se sube al siguiente, y en Difícil se acaba la partida.
    pub(crate) fn select_next(&mut self) -> Selection {
        for _ in 0..Difficulty::ALL.len() {
            let difficulty = self.current_difficulty;

            // 1) Rellenar el pool si está vacío
            if self.pool_len(difficulty) == 0 {
                match self.source.fetch(difficulty.level()) {
                    Ok(batch) => {
                        let fresh: Vec<Question> = batch
                            .into_iter()
                            .filter(|q| !self.asked_ids.contains(&q.id))
                            .collect();
                        if fresh.is_empty() {
                            log::debug!("Sin preguntas nuevas en {}", difficulty.api_name());
                        } else {
                            log::debug!(
                                "{} preguntas nuevas en {}",
                                fresh.len(),
                                difficulty.api_name()
                            );
                            self.pools.insert(difficulty, fresh);
                        }
                    }
                    Err(err) => {
                        log::warn!("Fallo pidiendo preguntas ({}): {err}", difficulty.api_name());
                        self.status = Some(Status::FetchFailed(err));
                        self.current_question = None;
                        return Selection::Unavailable;
                    }
                }
            }

            // 2) Elegir al azar entre las que no se han preguntado
            if let Some(question) = self.take_random(difficulty) {
                log::debug!("Sirviendo pregunta {}", question.id);
                self.asked_ids.insert(question.id.clone());
                self.current_question = Some(question);
                self.phase = Phase::AwaitingAnswer;
                return Selection::Served;
            }

            // 3) Nivel sin preguntas nuevas: subir o terminar
            match difficulty.next() {
                Some(next) => {
                    log::info!("Nivel {} agotado, pasando a {}", difficulty.level(), next.level());
                    self.current_difficulty = next;
                    self.status = Some(Status::AdvancedDifficulty {
                        from: difficulty,
                        to: next,
                    });
                }
                None => break,
            }
        }

        log::info!("Partida terminada con {} puntos", self.score);
        self.current_question = None;
        self.phase = Phase::GameOver;
        self.status = Some(Status::Exhausted);
        Selection::GameOver
    }

    fn take_random(&mut self, difficulty: Difficulty) -> Option<Question> {
        let asked = &self.asked_ids;
        let pool = self.pools.get_mut(&difficulty)?;
        pool.retain(|q| !asked.contains(&q.id));
        if pool.is_empty() {
            return None;
        }

        let idx = self.rng.gen_range(0..pool.len());
        let question = pool.swap_remove(idx);
        // Un lote puede traer la misma pregunta repetida
        pool.retain(|q| q.id != question.id);
        Some(question)
    }
}
