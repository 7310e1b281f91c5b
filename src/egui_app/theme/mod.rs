//! Theme Module
//!
//! Light and dark palettes and the frame builders the views share.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_theme(ctx, state.theme());
//! let palette = colors::palette(state.theme());
//! styles::card_frame(&palette).show(ui, |ui| {
//!     // Section content
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
