use anyhow::Result;
use notify_rust::{Notification, Timeout};

use crate::models::task::TaskCardSpec;
use crate::services::countdown::CardEffect;

/// Receives the side effects of card button presses.
#[cfg_attr(test, mockall::automock)]
pub trait TaskNotifier {
    fn on_claim(&self, task: &TaskCardSpec);
    fn on_share(&self, task: &TaskCardSpec);
}

/// Route a press effect to the matching notifier callback.
pub fn dispatch_effect(notifier: &dyn TaskNotifier, task: &TaskCardSpec, effect: CardEffect) {
    match effect {
        CardEffect::Claim => notifier.on_claim(task),
        CardEffect::Share => notifier.on_share(task),
    }
}

/// Writes claim/share actions to the application log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl TaskNotifier for LogNotifier {
    fn on_claim(&self, task: &TaskCardSpec) {
        log::info!("Claim now ({}: {} points)", task.title, task.points);
    }

    fn on_share(&self, task: &TaskCardSpec) {
        log::info!("Share with friends ({})", task.title);
    }
}

/// Shows claim/share actions as system notifications.
pub struct DesktopNotifier {
    enabled: bool,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Check if notifications are enabled
    #[allow(dead_code)]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable notifications
    #[allow(dead_code)]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn show(&self, summary: &str, body: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        Notification::new()
            .summary(summary)
            .body(body)
            .timeout(Timeout::Milliseconds(5000))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskNotifier for DesktopNotifier {
    fn on_claim(&self, task: &TaskCardSpec) {
        let body = format!("{} points claimed", task.points);
        if let Err(err) = self.show(&task.title, &body) {
            log::error!("Claim notification failed: {err:?}");
        }
    }

    fn on_share(&self, task: &TaskCardSpec) {
        if let Err(err) = self.show(&task.title, "Share with friends") {
            log::error!("Share notification failed: {err:?}");
        }
    }
}
