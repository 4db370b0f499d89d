use std::time::Instant;

use eframe::egui::{self, Ui};

use crate::services::QueryDispatcher;

/// Free-text search field. Every edit feeds the dispatcher as raw input;
/// Enter or the Search button submits unconditionally, bypassing whatever
/// gating the active mode applies.
pub struct SearchBox {
    input: String,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            input: String::new(),
        }
    }

    pub fn show(&mut self, ui: &mut Ui, dispatcher: &mut QueryDispatcher, now: Instant) {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .hint_text("Search by name, email, job or department...")
                    .desired_width(360.0),
            );

            if response.changed() {
                dispatcher.input(&self.input, now);
            }

            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Search").clicked() || submitted {
                dispatcher.submit(&self.input);
            }
        });
    }
}
