// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod clipboard;
mod config;
mod fonts;
mod logging;
mod share_intent;

use app::FapsDashboardApp;
use eframe::egui;
use tracing::{info, warn};

fn main() -> eframe::Result<()> {
    // Load config to get saved window state and the log filter
    let (config, config_problem) = config::Config::load();
    logging::init(&config.log_filter);
    if let Some(problem) = config_problem {
        warn!("{}", problem);
    }
    info!(path = %config::config_path().display(), "Starting FAPS dashboard");

    // Build viewport with saved or default size/position
    let mut viewport = egui::ViewportBuilder::default()
        .with_title("FAPS Dashboard")
        .with_inner_size([
            config.window_width.unwrap_or(1280.0),
            config.window_height.unwrap_or(900.0),
        ])
        .with_min_inner_size([960.0, 640.0]);

    // Apply saved position if available
    if let (Some(x), Some(y)) = (config.window_x, config.window_y) {
        viewport = viewport.with_position([x, y]);
    }

    // Apply maximized state
    if config.window_maximized {
        viewport = viewport.with_maximized(true);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "FAPS Dashboard",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            fonts::apply_font_settings(&cc.egui_ctx, &config);
            cc.egui_ctx.set_visuals(egui::Visuals::dark());

            Ok(Box::new(FapsDashboardApp::new(config)))
        }),
    )
}
