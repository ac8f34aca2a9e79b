mod lifecycle;

use crate::models::settings::AppSettings;
use crate::services::notification::TaskNotifier;
use crate::services::scheduler::{TickReceiver, TokioTickScheduler};
use crate::ui_egui::screen::RewardsScreen;
use crate::ui_egui::theme::RewardsTheme;

pub struct RewardsApp {
    settings: AppSettings,
    /// Currently applied theme colors
    theme: RewardsTheme,
    /// Cards and their countdown state
    screen: RewardsScreen,
    scheduler: TokioTickScheduler,
    /// Ticks from the scheduler, drained on the UI thread every frame
    ticks: TickReceiver,
    notifier: Box<dyn TaskNotifier>,
    /// Dropped last so every timer task is cancelled before shutdown
    _runtime: tokio::runtime::Runtime,
}

impl eframe::App for RewardsApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
