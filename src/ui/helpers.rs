// src/ui/helpers.rs
use crate::session::{Feedback, Status};
use egui::{Color32, RichText, Ui};

pub fn feedback_label(ui: &mut Ui, feedback: &Feedback) {
    let color = if feedback.is_correct() {
        Color32::GREEN
    } else {
        Color32::LIGHT_RED
    };
    ui.label(RichText::new(feedback.message()).color(color).strong());
}

/// Los fallos de red en amarillo; el resto es informativo.
pub fn status_label(ui: &mut Ui, status: &Status) {
    let text = RichText::new(status.to_string());
    if status.is_retryable() {
        ui.label(text.color(Color32::YELLOW));
    } else {
        ui.label(text.italics());
    }
}
