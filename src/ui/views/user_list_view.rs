use eframe::egui::{self, Ui};

use crate::domain::user::User;

/// Tabular listing of the current filter results.
pub struct UserListView;

impl Default for UserListView {
    fn default() -> Self {
        Self::new()
    }
}

impl UserListView {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui, users: &[User]) {
        if users.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(egui::RichText::new("No matching users.").size(16.0));
                ui.add_space(40.0);
            });
            return;
        }

        ui.label(format!("{} users shown", users.len()));
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                egui::Grid::new("user_table")
                    .striped(true)
                    .num_columns(5)
                    .spacing([24.0, 4.0])
                    .show(ui, |ui| {
                        ui.strong("ID");
                        ui.strong("Name");
                        ui.strong("Email");
                        ui.strong("Job");
                        ui.strong("Department");
                        ui.end_row();

                        for user in users {
                            ui.label(user.id.to_string());
                            ui.label(&user.name);
                            ui.label(&user.email);
                            ui.label(&user.job);
                            ui.label(&user.department);
                            ui.end_row();
                        }
                    });
            });
    }
}
