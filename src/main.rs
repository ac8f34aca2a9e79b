// Reward Tasks Application
// Main entry point

use anyhow::{Context, Result};
use reward_tasks::services::settings::SettingsService;
use reward_tasks::ui_egui::RewardsApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Reward Tasks");

    let settings_service = SettingsService::new(SettingsService::default_path());
    let settings = settings_service.load_or_default();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("reward-ticks")
        .enable_time()
        .build()
        .context("Failed to start timer runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rewards")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([
                reward_tasks::models::settings::MIN_WINDOW_WIDTH,
                reward_tasks::models::settings::MIN_WINDOW_HEIGHT,
            ]),
        ..Default::default()
    };

    eframe::run_native(
        "Reward Tasks",
        options,
        Box::new(move |cc| Ok(Box::new(RewardsApp::new(cc, settings, runtime)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to run application: {err}"))
}
