use eframe::egui::{self, Color32, Ui};

use crate::services::LoadSimulator;

/// Progress bar scale: purely cosmetic, the search itself is unbounded.
const PROGRESS_SPAN: f32 = 10_000.0;

/// Shows what the load generator has been up to: the trailing window of
/// discovered primes and how far the cursor has crawled.
pub struct LoadView;

impl Default for LoadView {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadView {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui, simulator: &LoadSimulator) {
        ui.label(egui::RichText::new("⚠ CPU load: prime hunting").strong());

        ui.horizontal_wrapped(|ui| {
            for prime in simulator.recent_primes() {
                ui.label(
                    egui::RichText::new(prime.to_string())
                        .background_color(Color32::from_rgb(219, 234, 254))
                        .color(Color32::from_rgb(30, 64, 175)),
                );
            }
        });

        let progress = (simulator.cursor() as f32 / PROGRESS_SPAN).min(1.0);
        ui.add(egui::ProgressBar::new(progress).desired_width(ui.available_width()));

        ui.horizontal(|ui| {
            ui.label(format!("Numbers checked: {}", simulator.cursor()));
            ui.separator();
            ui.label(format!("Primes in window: {}", simulator.recent_primes().len()));
        });
    }
}
