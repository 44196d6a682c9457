// Countdown List Application
// Main entry point

use anyhow::Result;
use countdown_list::services::config::ConfigService;
use countdown_list::ui_egui::CountdownApp;

const MIN_WIDTH: f32 = 320.0;
const MIN_HEIGHT: f32 = 480.0;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Countdown List");

    let config_service = ConfigService::from_project_dirs();
    let config = config_service.load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Countdowns")
            .with_inner_size([config.window.width.max(MIN_WIDTH), config.window.height.max(MIN_HEIGHT)])
            .with_min_inner_size([MIN_WIDTH, MIN_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Countdowns",
        options,
        Box::new(move |cc| Ok(Box::new(CountdownApp::new(cc, config)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run countdown window: {err}"))
}
