//! New To-do Form

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let palette = colors::palette(state.theme());

    styles::card_frame(&palette).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.new_todo_text)
                    .hint_text("What needs to be done?")
                    .desired_width(ui.available_width() - 80.0),
            );

            // Submit on Enter
            let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if response.lost_focus() && enter_pressed {
                state.submit_new_todo();
                response.request_focus();
            }

            let can_add = !state.new_todo_text.trim().is_empty() && !state.is_adding();
            let label = if state.is_adding() { "Adding..." } else { "Add" };
            if ui.add_enabled(can_add, egui::Button::new(label)).clicked() {
                state.submit_new_todo();
            }
        });
    });
}
