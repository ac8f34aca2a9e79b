use super::RewardsApp;
use crate::models::settings::AppSettings;
use crate::services::notification::{DesktopNotifier, LogNotifier, TaskNotifier};
use crate::services::scheduler::TokioTickScheduler;
use crate::ui_egui::screen::RewardsScreen;
use crate::ui_egui::theme::RewardsTheme;

impl RewardsApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: AppSettings,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        let repaint_ctx = cc.egui_ctx.clone();
        let (scheduler, ticks) = TokioTickScheduler::new(runtime.handle().clone());
        let scheduler = scheduler.with_waker(move || repaint_ctx.request_repaint());

        let notifier: Box<dyn TaskNotifier> = if settings.desktop_notifications {
            Box::new(DesktopNotifier::new())
        } else {
            Box::new(LogNotifier)
        };

        let theme = RewardsTheme::from_preference(settings.theme);
        theme.apply_to_context(&cc.egui_ctx);

        let screen = RewardsScreen::from_settings(&settings);
        log::info!(
            "Rewards screen ready: {} cards, countdown {}s, theme {:?}",
            screen.cards().len(),
            settings.countdown_seconds,
            settings.theme
        );

        Self {
            settings,
            theme,
            screen,
            scheduler,
            ticks,
            notifier,
            _runtime: runtime,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_visibility(ctx);
        self.drain_ticks();

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.screen.show(ui, &self.theme, self.notifier.as_ref());
            });
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.screen.disappear();
        log::info!("Shutting down rewards screen");
    }

    /// A minimised window hides the screen; restoring it shows it again.
    fn sync_visibility(&mut self, ctx: &egui::Context) {
        let minimized = ctx.input(|i| i.viewport().minimized).unwrap_or(false);
        if minimized {
            self.screen.disappear();
        } else {
            self.screen.appear(&self.scheduler);
        }
    }

    fn drain_ticks(&mut self) {
        while let Ok(event) = self.ticks.try_recv() {
            self.screen.dispatch_tick(event);
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }
}
