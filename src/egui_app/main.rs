/**
 * TodoFlow Desktop Client - Main Entry Point
 *
 * Opens the shared to-do list in an eframe window and keeps it in sync
 * with the server over the event stream.
 */
use std::time::Duration;

use eframe::egui;
use todoflow::egui_app::{theme::styles, views, AppState, Config, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::new();
    tracing::info!(
        "[Client] Connecting to {} as {}",
        config.server_url(),
        config.client_id()
    );

    let mut state = AppState::new(config, Settings::default_path())?;
    state.start();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 820.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "TodoFlow",
        options,
        Box::new(move |_cc| Ok(Box::new(TodoFlowApp { state }))),
    )?;

    Ok(())
}

/// Main application state
struct TodoFlowApp {
    state: AppState,
}

impl eframe::App for TodoFlowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        styles::apply_theme(ctx, self.state.theme());
        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Results arrive from background tasks; poll for them regularly.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
