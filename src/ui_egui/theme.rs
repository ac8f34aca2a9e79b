//! Theme module for the rewards screen
//!
//! Defines the RewardsTheme colour set and maps semantic view tones to
//! concrete egui colours.

use egui::Color32;

use crate::models::settings::ThemePreference;
use crate::services::countdown::ButtonTone;

/// Colours used by the rewards screen
#[derive(Debug, Clone, PartialEq)]
pub struct RewardsTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Screen gradient, top-left corner
    pub background_start: Color32,
    /// Screen gradient, bottom-right corner
    pub background_end: Color32,

    /// Card panel gradient
    pub card_start: Color32,
    pub card_end: Color32,
    pub card_shadow: Color32,

    pub title_text: Color32,
    pub countdown_text: Color32,
    pub points_text: Color32,
    pub trophy: Color32,

    pub button_idle: Color32,
    pub button_tapped: Color32,
    pub button_text: Color32,
}

impl RewardsTheme {
    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            background_start: Color32::BLACK,
            background_end: Color32::from_rgb(142, 142, 147),
            card_start: Color32::from_rgba_unmultiplied(0, 0, 0, 204),
            card_end: Color32::from_rgba_unmultiplied(142, 142, 147, 204),
            card_shadow: Color32::from_black_alpha(90),
            title_text: Color32::WHITE,
            countdown_text: Color32::from_rgb(142, 142, 147),
            points_text: Color32::from_rgb(52, 199, 89),
            trophy: Color32::from_rgb(255, 204, 0),
            button_idle: Color32::from_rgb(0, 122, 255),
            button_tapped: Color32::from_rgb(255, 149, 0),
            button_text: Color32::WHITE,
        }
    }

    /// Create the Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            background_start: Color32::from_rgb(245, 245, 245),
            background_end: Color32::from_rgb(200, 200, 205),
            card_start: Color32::from_rgba_unmultiplied(60, 60, 67, 220),
            card_end: Color32::from_rgba_unmultiplied(120, 120, 128, 220),
            card_shadow: Color32::from_black_alpha(60),
            ..Self::dark()
        }
    }

    /// Resolve a preference to a concrete theme. `System` asks the OS.
    pub fn from_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Light => Self::light(),
                dark_light::Mode::Dark | dark_light::Mode::Default => Self::dark(),
            },
        }
    }

    pub fn button_fill(&self, tone: ButtonTone) -> Color32 {
        match tone {
            ButtonTone::Idle => self.button_idle,
            ButtonTone::Tapped => self.button_tapped,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.background_start;
        visuals.panel_fill = self.background_start;

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_fill_per_tone() {
        let theme = RewardsTheme::dark();
        assert_eq!(theme.button_fill(ButtonTone::Idle), theme.button_idle);
        assert_eq!(theme.button_fill(ButtonTone::Tapped), theme.button_tapped);
        assert_ne!(theme.button_idle, theme.button_tapped);
    }

    #[test]
    fn test_explicit_preferences() {
        assert!(RewardsTheme::from_preference(ThemePreference::Dark).is_dark);
        assert!(!RewardsTheme::from_preference(ThemePreference::Light).is_dark);
    }

    #[test]
    fn test_light_keeps_accent_colors() {
        let light = RewardsTheme::light();
        let dark = RewardsTheme::dark();
        assert_eq!(light.points_text, dark.points_text);
        assert_ne!(light.background_start, dark.background_start);
    }
}
