mod app;
pub mod app_config;
pub mod commands;
pub mod state;
mod widgets;

use app::ReservationApp;
pub use app_config::{AppConfig, ConfigError};

/// Opens the reservation window and blocks until it is closed.
pub fn run(config: AppConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_maximized(config.start_maximized)
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(ReservationApp::new(&cc.egui_ctx, &config)))),
    )
}
