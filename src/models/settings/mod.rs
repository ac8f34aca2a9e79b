// Settings module
// Application preferences loaded from settings.toml

use serde::{Deserialize, Serialize};

use crate::models::task::DEFAULT_COUNTDOWN_SECONDS;

pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 220.0;

/// Which colour scheme to use for the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
    /// Follow the operating system preference
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub window_width: f32,
    pub window_height: f32,
    pub theme: ThemePreference,
    /// Starting value of every claim countdown
    pub countdown_seconds: u32,
    pub tick_interval_ms: u64,
    /// Route claim/share notifications to the desktop instead of the log
    pub desktop_notifications: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_width: 380.0,
            window_height: 760.0,
            theme: ThemePreference::Dark,
            countdown_seconds: DEFAULT_COUNTDOWN_SECONDS,
            tick_interval_ms: 1000,
            desktop_notifications: false,
        }
    }
}

impl AppSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.window_width.is_nan() || self.window_width < MIN_WINDOW_WIDTH {
            return Err(format!(
                "window_width must be at least {MIN_WINDOW_WIDTH}, got {}",
                self.window_width
            ));
        }
        if self.window_height.is_nan() || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(format!(
                "window_height must be at least {MIN_WINDOW_HEIGHT}, got {}",
                self.window_height
            ));
        }
        if self.countdown_seconds == 0 {
            return Err("countdown_seconds must be greater than zero".to_string());
        }
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be greater than zero".to_string());
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }
}
