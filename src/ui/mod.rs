mod helpers;
pub mod layout;
pub mod views;

use crate::app::TriviaApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for TriviaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTÓN SUPERIOR DE REINICIAR (solo durante la partida y al terminar)
        if matches!(self.state(), AppState::Quiz | AppState::GameOver) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.state() {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::GameOver => views::game_over::ui_game_over(self, ctx),
        }

        if self.confirm_reset {
            layout::confirm_reset(self, ctx);
        }
    }
}
