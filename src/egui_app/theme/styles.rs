//! Theme Styling Functions

use eframe::egui::{self, CornerRadius, Stroke};

use super::colors::{self, Palette};
use crate::egui_app::settings::Theme;
use crate::egui_app::toast::ToastKind;

/// Apply the light or dark theme to the egui context
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let palette = colors::palette(theme);
    let mut visuals = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.panel;
    visuals.override_text_color = Some(palette.text);
    visuals.selection.bg_fill = palette.accent;
    visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_ON_ACCENT);

    ctx.set_visuals(visuals);
}

/// Create a frame style for the top bar
pub fn top_bar_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.top_bar)
        .inner_margin(egui::Margin::symmetric(16, 10))
}

/// Create a frame for the form, stats and list sections
pub fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.card)
        .stroke(Stroke::new(1.0, palette.card_border))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(12, 10))
}

/// Create a frame for one toast
pub fn toast_frame(kind: ToastKind) -> egui::Frame {
    egui::Frame::new()
        .fill(colors::toast_color(kind))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 8))
        .shadow(egui::epaint::Shadow {
            offset: [0, 2],
            blur: 8,
            spread: 0,
            color: egui::Color32::from_black_alpha(60),
        })
}

/// Create a frame for the standard-mode banner
pub fn banner_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::WARNING)
        .inner_margin(egui::Margin::symmetric(16, 6))
}
