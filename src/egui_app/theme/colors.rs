//! Color Constants
//!
//! Two palettes, light and dark, plus the toast colors shared by both.

use eframe::egui::Color32;

use crate::egui_app::settings::Theme;
use crate::egui_app::toast::ToastKind;

/// Colors that change with the theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub top_bar: Color32,
}

pub const LIGHT: Palette = Palette {
    background: Color32::from_rgb(0xF3, 0xF4, 0xF6),
    panel: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    card: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    card_border: Color32::from_rgb(0xE5, 0xE7, 0xEB),
    text: Color32::from_rgb(0x1F, 0x29, 0x37),
    text_muted: Color32::from_rgb(0x6B, 0x72, 0x80),
    accent: Color32::from_rgb(0x4F, 0x46, 0xE5),
    top_bar: Color32::from_rgb(0x4F, 0x46, 0xE5),
};

pub const DARK: Palette = Palette {
    background: Color32::from_rgb(0x11, 0x18, 0x27),
    panel: Color32::from_rgb(0x1F, 0x29, 0x37),
    card: Color32::from_rgb(0x37, 0x41, 0x51),
    card_border: Color32::from_rgb(0x4B, 0x55, 0x63),
    text: Color32::from_rgb(0xF9, 0xFA, 0xFB),
    text_muted: Color32::from_rgb(0x9C, 0xA3, 0xAF),
    accent: Color32::from_rgb(0x81, 0x8C, 0xF8),
    top_bar: Color32::from_rgb(0x31, 0x2E, 0x81),
};

/// Text on the top bar and on toasts
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);

/// Info color - Blue
pub const INFO: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);

/// Warning color - Amber
pub const WARNING: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}

pub fn toast_color(kind: ToastKind) -> Color32 {
    match kind {
        ToastKind::Success => SUCCESS,
        ToastKind::Info => INFO,
        ToastKind::Warning => WARNING,
        ToastKind::Error => ERROR,
    }
}
