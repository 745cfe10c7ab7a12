use crate::TriviaApp;
use crate::model::AnswerMode;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_welcome(app: &mut TriviaApp, ctx: &Context) {
    centered_panel(ctx, 280.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🌍 ¡Reto de Historia!");
            ui.add_space(10.0);
            ui.label("Acierta para subir de dificultad. Falla y te quedas en el mismo nivel.");
            ui.add_space(18.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            let btn_h = 40.0;

            let preferred = app.config.answer_mode;
            let label = |mode: AnswerMode, text: &str| {
                if mode == preferred {
                    format!("▶ {text}")
                } else {
                    text.to_string()
                }
            };

            let btn_choice = ui.add_sized(
                [btn_w, btn_h],
                Button::new(label(AnswerMode::MultipleChoice, "Opción múltiple")),
            );
            ui.add_space(5.0);
            let btn_text = ui.add_sized(
                [btn_w, btn_h],
                Button::new(label(AnswerMode::FreeText, "Respuesta libre")),
            );
            ui.add_space(5.0);
            let btn_exit = ui.add_sized([btn_w, btn_h], Button::new("Salir"));

            if btn_choice.clicked() {
                app.empezar_partida(AnswerMode::MultipleChoice);
            }
            if btn_text.clicked() {
                app.empezar_partida(AnswerMode::FreeText);
            }
            if btn_exit.clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(RichText::new(&app.message).color(egui::Color32::YELLOW));
            }
        });
    });
}
