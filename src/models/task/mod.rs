//! Reward task model.
//!
//! A task card is described by immutable construction parameters
//! ([`TaskCardSpec`]) plus a small amount of mutable per-card state
//! ([`CardState`]) owned by the card controller.

use serde::{Deserialize, Serialize};

/// Starting value of a claim countdown, in seconds (one hour).
pub const DEFAULT_COUNTDOWN_SECONDS: u32 = 3600;

/// Immutable parameters of one reward task card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCardSpec {
    /// Headline shown at the top of the card
    pub title: String,
    /// Reward amount shown as "N Points"
    pub points: u32,
    /// Claim mode with a countdown when set, share mode otherwise
    pub has_timer: bool,
    /// Shows the trophy icon next to the title
    pub is_winner: bool,
}

impl TaskCardSpec {
    pub fn new(title: impl Into<String>, points: u32, has_timer: bool, is_winner: bool) -> Self {
        Self {
            title: title.into(),
            points,
            has_timer,
            is_winner,
        }
    }

    pub fn mode(&self) -> CardMode {
        if self.has_timer {
            CardMode::Claim
        } else {
            CardMode::Share
        }
    }
}

/// What the card button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    Claim,
    Share,
}

impl CardMode {
    pub fn button_label(&self) -> &'static str {
        match self {
            CardMode::Claim => "Claim Now",
            CardMode::Share => "Share",
        }
    }
}

/// Mutable state of a single card. Never shared between cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardState {
    pub remaining_seconds: u32,
    pub tapped: bool,
}

impl CardState {
    pub fn new(remaining_seconds: u32) -> Self {
        Self {
            remaining_seconds,
            tapped: false,
        }
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTDOWN_SECONDS)
    }
}

/// The fixed task list shown on the rewards screen, top to bottom.
pub fn default_task_specs() -> Vec<TaskCardSpec> {
    vec![
        TaskCardSpec::new("Monthly Leaderboard Winner", 100, false, true),
        TaskCardSpec::new("Share With 5 friends!", 10, false, false),
        TaskCardSpec::new("Claim 10 Point Every Hour", 10, true, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_follows_timer_flag() {
        assert_eq!(TaskCardSpec::new("a", 1, true, false).mode(), CardMode::Claim);
        assert_eq!(TaskCardSpec::new("a", 1, false, false).mode(), CardMode::Share);
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(CardMode::Claim.button_label(), "Claim Now");
        assert_eq!(CardMode::Share.button_label(), "Share");
    }

    #[test]
    fn test_default_state_starts_at_one_hour_untapped() {
        let state = CardState::default();
        assert_eq!(state.remaining_seconds, 3600);
        assert!(!state.tapped);
    }

    #[test]
    fn test_default_task_specs_order() {
        let specs = default_task_specs();
        assert_eq!(specs.len(), 3);
        assert!(specs[0].is_winner);
        assert_eq!(specs[0].points, 100);
        assert_eq!(specs[1].title, "Share With 5 friends!");
        assert!(specs[2].has_timer);
        assert_eq!(specs.iter().filter(|s| s.has_timer).count(), 1);
    }
}
