//! Pure description of what a card should look like for a given state.
//!
//! The egui layer paints a [`CardView`] and nothing else; all decisions
//! about labels, captions and button appearance are made here.

use crate::models::task::{CardState, TaskCardSpec};

use super::format::{countdown_caption, points_caption};

pub const IDLE_BUTTON_SCALE: f32 = 1.0;
pub const TAPPED_BUTTON_SCALE: f32 = 1.1;

/// Semantic button colour; the theme maps it to an actual colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    /// Blue
    Idle,
    /// Orange
    Tapped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub label: &'static str,
    pub tone: ButtonTone,
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: String,
    pub show_trophy: bool,
    /// `None` for share cards
    pub countdown_text: Option<String>,
    pub points_text: String,
    pub button: ButtonView,
}

pub fn card_view(spec: &TaskCardSpec, state: &CardState) -> CardView {
    let (tone, scale) = if state.tapped {
        (ButtonTone::Tapped, TAPPED_BUTTON_SCALE)
    } else {
        (ButtonTone::Idle, IDLE_BUTTON_SCALE)
    };

    CardView {
        title: spec.title.clone(),
        show_trophy: spec.is_winner,
        countdown_text: spec
            .has_timer
            .then(|| countdown_caption(state.remaining_seconds)),
        points_text: points_caption(spec.points),
        button: ButtonView {
            label: spec.mode().button_label(),
            tone,
            scale,
        },
    }
}
