use crate::TriviaApp;
use crate::ui::helpers::feedback_label;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, RichText};

pub fn ui_game_over(app: &mut TriviaApp, ctx: &Context) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let score = session.score();
    let answered = session.answered();
    let asked = session.asked_count();
    let feedback = session.feedback().cloned();

    let mut play_again = false;
    let mut back_to_menu = false;

    centered_panel(ctx, 260.0, 500.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("¡Fin del juego!");
            ui.add_space(10.0);
            if let Some(feedback) = &feedback {
                feedback_label(ui, feedback);
                ui.add_space(6.0);
            }
            ui.label(
                RichText::new(format!("Puntuación final: {score} de {answered}"))
                    .heading()
                    .strong(),
            );
            ui.label(format!("Preguntas vistas: {asked}"));
            ui.add_space(20.0);

            let panel_width = ui.available_width().min(400.0);
            (play_again, back_to_menu) =
                two_button_row(ui, panel_width, "Jugar otra vez", "Volver al menú");
        });
    });

    if play_again {
        app.reiniciar_partida();
    }
    if back_to_menu {
        app.volver_al_menu();
    }
}
