mod api;
mod app;
mod config;
mod state;
mod table;
#[cfg(test)]
mod test_support;
mod ui;
mod worker;

use app::DataSanityApp;
use config::{ClientConfig, DEFAULT_API_URL};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        log::error!("{e:#}; falling back to {DEFAULT_API_URL}");
        ClientConfig::default()
    });
    log::info!("Using backend at {}", config.api_base_url);

    let app = DataSanityApp::new(&config).map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DataSanity – AI-Powered Data Processing",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
