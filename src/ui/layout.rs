use crate::TriviaApp;
use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};

pub fn top_panel(app: &mut TriviaApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🔄 Reiniciar partida").clicked() {
                app.confirm_reset = true;
            }
            if ui.button("Cambiar modo").clicked() {
                app.volver_al_menu();
                ctx.request_repaint();
            }
        });
    });
}

/// Barra inferior con el cambio de tema claro/oscuro.
pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("theme_bar").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let dark = ctx.style().visuals.dark_mode;
            let label = if dark { "☀ Tema claro" } else { "🌙 Tema oscuro" };
            if ui.button(label).clicked() {
                ctx.set_visuals(if dark { Visuals::light() } else { Visuals::dark() });
            }
        });
    });
}

pub fn confirm_reset(app: &mut TriviaApp, ctx: &Context) {
    egui::Window::new("Confirmar reinicio")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("¿Seguro que quieres empezar de nuevo? Perderás la puntuación actual.");
            ui.horizontal(|ui| {
                if ui.button("Sí, reiniciar").clicked() {
                    app.reiniciar_partida();
                }
                if ui.button("No").clicked() {
                    app.confirm_reset = false;
                }
            });
        });
}

const ROW_GAP: f32 = 8.0;
const BUTTON_HEIGHT: f32 = 36.0;

/// Hueco que queda por encima (y por debajo) de un bloque de `content` de
/// alto dentro de `available`.
pub fn vertical_margin(available: f32, content: f32) -> f32 {
    ((available - content) / 2.0).max(0.0)
}

/// Sangría inicial y ancho de cada botón para una fila de dos botones de
/// `row_width` dentro de `available`.
pub fn button_row_geometry(available: f32, row_width: f32) -> (f32, f32) {
    let lead = ((available - row_width) / 2.0).max(0.0);
    let button = ((row_width - ROW_GAP) / 2.0).max(0.0);
    (lead, button)
}

/// Tarjeta de ancho máximo `max_width` en el centro de la pantalla.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let margin = vertical_margin(ui.available_height(), est_height);
        ui.add_space(margin);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width().min(max_width));
                inner(ui);
            });
    });
}

/// (izquierdo pulsado, derecho pulsado)
pub fn two_button_row(
    ui: &mut Ui,
    row_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    ui.horizontal(|ui| {
        let (lead, button) = button_row_geometry(ui.available_width(), row_width);
        ui.add_space(lead);
        let left = ui.add_sized([button, BUTTON_HEIGHT], Button::new(left_label));
        let right = ui.add_sized([button, BUTTON_HEIGHT], Button::new(right_label));
        (left.clicked(), right.clicked())
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_taller_than_screen_gets_no_margin() {
        assert_eq!(vertical_margin(600.0, 280.0), 160.0);
        assert_eq!(vertical_margin(200.0, 280.0), 0.0);
    }

    #[test]
    fn button_row_is_centered_and_split_in_two() {
        let (lead, button) = button_row_geometry(500.0, 300.0);
        assert_eq!(lead, 100.0);
        assert_eq!(button, 146.0);
        assert_eq!(lead + 2.0 * button + ROW_GAP + lead, 500.0);
    }

    #[test]
    fn narrow_row_does_not_go_negative() {
        assert_eq!(button_row_geometry(100.0, 300.0), (0.0, 146.0));
        assert_eq!(button_row_geometry(100.0, 4.0).1, 0.0);
    }
}
