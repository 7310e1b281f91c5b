use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::sync::SubscriptionStatus;
use crate::egui_app::theme::{colors, styles};

pub mod todo_form;
pub mod todo_list_view;
pub mod toasts;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let palette = colors::palette(state.theme());

    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame(&palette))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_ON_ACCENT,
                    egui::RichText::new("✔ TodoFlow").size(20.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = if state.theme().is_dark() { "☀ Light" } else { "🌙 Dark" };
                    if ui.button(theme_label).clicked() {
                        state.toggle_theme();
                    }

                    ui.add_space(16.0);

                    let (color, label) = match state.connection {
                        SubscriptionStatus::Connected => (colors::SUCCESS, "🟢 Live"),
                        SubscriptionStatus::Connecting | SubscriptionStatus::Retrying => {
                            (colors::WARNING, "🔄 Connecting")
                        }
                        SubscriptionStatus::Error(_) | SubscriptionStatus::Disconnected => {
                            (colors::ERROR, "🔴 Offline")
                        }
                    };
                    ui.colored_label(color, label);
                });
            });
        });

    // Standard mode: no live stream, but HTTP calls still work.
    if state.is_standard_mode() && state.connection != SubscriptionStatus::Connecting {
        egui::TopBottomPanel::top("standard_mode_banner")
            .frame(styles::banner_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(
                        colors::TEXT_ON_ACCENT,
                        "Standard mode: changes by others appear after a refresh",
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if state.is_disconnected() && ui.button("Reconnect").clicked() {
                            state.start();
                        }
                        if ui.button("Refresh").clicked() {
                            state.fetch_todos();
                        }
                    });
                });
            });
    }
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.set_max_width(640.0);
            ui.add_space(16.0);

            todo_form::render(ui, state);
            ui.add_space(12.0);
            todo_list_view::render_stats(ui, state);
            ui.add_space(12.0);
            todo_list_view::render_controls(ui, state);
            ui.add_space(8.0);
            todo_list_view::render_list(ui, state);
        });
    });

    toasts::render(ctx, state);
}
