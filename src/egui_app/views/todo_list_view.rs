//! Stats, filter/search controls and the to-do list

use eframe::egui;
use uuid::Uuid;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::todo_list::{empty_message, Filter};
use crate::shared::TodoItem;

/// What the user asked for while the list was drawn
enum RowAction {
    Toggle(Uuid),
    BeginEdit(Uuid),
    CommitEdit,
    CancelEdit,
    Delete(Uuid),
}

pub fn render_stats(ui: &mut egui::Ui, state: &AppState) {
    let palette = colors::palette(state.theme());
    let stats = state.todos.stats();

    styles::card_frame(&palette).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.columns(3, |columns| {
            stat(&mut columns[0], "All", stats.all, palette.accent);
            stat(&mut columns[1], "Active", stats.active, colors::WARNING);
            stat(&mut columns[2], "Completed", stats.completed, colors::SUCCESS);
        });
    });
}

fn stat(ui: &mut egui::Ui, label: &str, value: usize, color: egui::Color32) {
    ui.vertical_centered(|ui| {
        ui.colored_label(color, egui::RichText::new(value.to_string()).size(22.0).strong());
        ui.label(label);
    });
}

pub fn render_controls(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        for filter in Filter::ALL {
            let label = match filter {
                Filter::All => "All",
                Filter::Active => "Active",
                Filter::Completed => "Completed",
            };
            ui.selectable_value(&mut state.filter, filter, label);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if !state.search.is_empty() && ui.button("✕").clicked() {
                state.search.clear();
            }
            ui.add(
                egui::TextEdit::singleline(&mut state.search)
                    .hint_text("Search tasks...")
                    .desired_width(200.0),
            );
            ui.label("🔍");
        });
    });
}

pub fn render_list(ui: &mut egui::Ui, state: &mut AppState) {
    let palette = colors::palette(state.theme());
    let items: Vec<TodoItem> = state
        .todos
        .visible(state.filter, &state.search)
        .into_iter()
        .cloned()
        .collect();

    if items.is_empty() {
        ui.add_space(24.0);
        ui.colored_label(palette.text_muted, empty_message(state.filter));
        return;
    }

    let mut action = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for item in &items {
                styles::card_frame(&palette).show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    if let Some(a) = render_row(ui, state, item, palette.text_muted) {
                        action = Some(a);
                    }
                });
                ui.add_space(6.0);
            }
        });

    match action {
        Some(RowAction::Toggle(id)) => state.toggle_completed(id),
        Some(RowAction::BeginEdit(id)) => state.begin_edit(id),
        Some(RowAction::CommitEdit) => state.commit_edit(),
        Some(RowAction::CancelEdit) => state.cancel_edit(),
        Some(RowAction::Delete(id)) => state.delete_todo(id),
        None => {}
    }
}

fn render_row(
    ui: &mut egui::Ui,
    state: &mut AppState,
    item: &TodoItem,
    muted: egui::Color32,
) -> Option<RowAction> {
    let busy = state.is_in_flight(item.id);
    let mut action = None;

    ui.horizontal(|ui| {
        let mut done = item.completed;
        if ui.add_enabled(!busy, egui::Checkbox::without_text(&mut done)).changed() {
            action = Some(RowAction::Toggle(item.id));
        }

        let editing = state.editing.as_mut().filter(|edit| edit.id == item.id);
        if let Some(edit) = editing {
            let response = ui.add(
                egui::TextEdit::singleline(&mut edit.text).desired_width(ui.available_width() - 120.0),
            );
            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                action = Some(RowAction::CancelEdit);
            } else if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = Some(RowAction::CommitEdit);
            }
            if ui.button("Save").clicked() {
                action = Some(RowAction::CommitEdit);
            }
            if ui.button("Cancel").clicked() {
                action = Some(RowAction::CancelEdit);
            }
            return;
        }

        let text = if item.completed {
            egui::RichText::new(&item.text).strikethrough().color(muted)
        } else {
            egui::RichText::new(&item.text)
        };
        if ui.add(egui::Label::new(text).sense(egui::Sense::click())).double_clicked() && !busy {
            action = Some(RowAction::BeginEdit(item.id));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(!busy, egui::Button::new("🗑")).clicked() {
                action = Some(RowAction::Delete(item.id));
            }
            if ui.add_enabled(!busy, egui::Button::new("✏")).clicked() {
                action = Some(RowAction::BeginEdit(item.id));
            }
            ui.colored_label(muted, item.created_at.format("%b %d, %H:%M").to_string());
        });
    });

    action
}
