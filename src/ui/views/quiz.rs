use crate::TriviaApp;
use crate::ui::helpers::{feedback_label, status_label};
use crate::ui::layout::two_button_row;
use egui::{Align, CentralPanel, Context, Key, RichText, ScrollArea, TextEdit};

pub fn ui_quiz(app: &mut TriviaApp, ctx: &Context) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    // Copias para no mantener el préstamo de la sesión mientras se dibuja
    let score_line = session.score_line();
    let question = session.current_question();
    let feedback = session.feedback().cloned();
    let status = session.status().cloned();

    let mut submit = false;
    let mut retry = false;
    let mut back = false;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(score_line.label()).strong());
                    ui.add_space(8.0);

                    if let Some(feedback) = &feedback {
                        feedback_label(ui, feedback);
                    }
                    if let Some(status) = &status {
                        status_label(ui, status);
                    }
                    ui.add_space(8.0);

                    match &question {
                        Some(question) => {
                            ui.heading(question.heading());
                            ui.add_space(6.0);
                            ui.allocate_ui_with_layout(
                                egui::vec2(panel_width, 0.0),
                                egui::Layout::top_down(Align::Min),
                                |ui| {
                                    ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                                        ui.label(&question.text);
                                    });

                                    ui.add_space(10.0);
                                    if question.options.is_empty() {
                                        let response = ui.add_sized(
                                            [panel_width, 28.0],
                                            TextEdit::singleline(&mut app.input)
                                                .hint_text("Escribe tu respuesta"),
                                        );
                                        if response.lost_focus()
                                            && ui.input(|i| i.key_pressed(Key::Enter))
                                        {
                                            submit = true;
                                        }
                                    } else {
                                        for (idx, option) in question.options.iter().enumerate() {
                                            ui.radio_value(
                                                &mut app.selected_option,
                                                Some(idx),
                                                option.as_str(),
                                            );
                                        }
                                    }
                                },
                            );

                            ui.add_space(10.0);
                            let (enviar, volver) =
                                two_button_row(ui, panel_width, "Enviar respuesta", "Volver al menú");
                            submit |= enviar;
                            back = volver;
                        }
                        None => {
                            ui.label("No hay ninguna pregunta disponible ahora mismo.");
                            ui.add_space(10.0);
                            let (reintentar, volver) =
                                two_button_row(ui, panel_width, "Reintentar", "Volver al menú");
                            retry = reintentar;
                            back = volver;
                        }
                    }

                    if !app.message.is_empty() {
                        ui.add_space(8.0);
                        ui.label(&app.message);
                    }
                });
            });
    });

    if submit {
        app.procesar_respuesta();
    }
    if retry {
        app.reintentar();
    }
    if back {
        app.volver_al_menu();
    }
}
