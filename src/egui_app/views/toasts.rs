//! Toast Overlay

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Render queued toasts stacked in the bottom-right corner
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if state.toasts.is_empty() {
        return;
    }

    let mut dismissed = None;

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-20.0, -20.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_max_width(360.0);
            for toast in state.toasts.iter() {
                styles::toast_frame(toast.kind).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(colors::TEXT_ON_ACCENT, &toast.message);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✕").clicked() {
                                dismissed = Some(toast.id);
                            }
                        });
                    });
                });
                ui.add_space(6.0);
            }
        });

    if let Some(id) = dismissed {
        state.toasts.dismiss(id);
    }
}
