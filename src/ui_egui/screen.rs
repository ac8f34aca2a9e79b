//! The rewards screen: three task cards stacked over a gradient.

use std::time::Duration;

use egui::{Color32, Rect};

use crate::models::settings::AppSettings;
use crate::models::task::{default_task_specs, TaskCardSpec};
use crate::services::countdown::{CardEffect, TaskCard};
use crate::services::notification::{dispatch_effect, TaskNotifier};
use crate::services::scheduler::{TickEvent, TickScheduler};

use super::animation::lerp_color;
use super::card_rendering::{card_outer_size, render_task_card};
use super::theme::RewardsTheme;

pub const CARD_SPACING: f32 = 20.0;
const SCREEN_MARGIN: f32 = 16.0;

pub struct RewardsScreen {
    cards: Vec<TaskCard>,
    visible: bool,
}

impl RewardsScreen {
    pub fn new(specs: Vec<TaskCardSpec>, countdown_seconds: u32, tick_period: Duration) -> Self {
        let cards = specs
            .into_iter()
            .map(|spec| TaskCard::with_countdown(spec, countdown_seconds).with_tick_period(tick_period))
            .collect();
        Self {
            cards,
            visible: false,
        }
    }

    /// The standard three-card screen configured from settings.
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(
            default_task_specs(),
            settings.countdown_seconds,
            settings.tick_interval(),
        )
    }

    pub fn cards(&self) -> &[TaskCard] {
        &self.cards
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The screen became visible; start countdowns. Repeated calls are ignored.
    pub fn appear(&mut self, scheduler: &dyn TickScheduler) {
        if self.visible {
            return;
        }
        self.visible = true;
        for card in &mut self.cards {
            card.appear(scheduler);
        }
        log::debug!("rewards screen visible");
    }

    /// The screen was hidden; every card releases its timer.
    pub fn disappear(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        for card in &mut self.cards {
            card.disappear();
        }
        log::debug!("rewards screen hidden");
    }

    /// Route a tick to the card owning its timer. Returns `true` if any
    /// card changed.
    pub fn dispatch_tick(&mut self, event: TickEvent) -> bool {
        self.cards
            .iter_mut()
            .fold(false, |changed, card| card.tick(event) || changed)
    }

    /// Press the button of the card at `index` and notify.
    pub fn press(&mut self, index: usize, notifier: &dyn TaskNotifier) -> Option<CardEffect> {
        let card = self.cards.get_mut(index)?;
        let effect = card.press();
        dispatch_effect(notifier, card.spec(), effect);
        Some(effect)
    }

    /// Paint the whole screen into `ui`, handling button presses.
    pub fn show(&mut self, ui: &mut egui::Ui, theme: &RewardsTheme, notifier: &dyn TaskNotifier) {
        paint_diagonal_gradient(
            ui.painter(),
            ui.max_rect(),
            theme.background_start,
            theme.background_end,
        );

        let stack_height = self.cards.len() as f32 * card_outer_size().y
            + self.cards.len().saturating_sub(1) as f32 * CARD_SPACING;
        let top_space = ((ui.available_height() - stack_height) / 2.0).max(SCREEN_MARGIN);

        let mut pressed = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(top_space);
                    for (index, card) in self.cards.iter().enumerate() {
                        if index > 0 {
                            ui.add_space(CARD_SPACING);
                        }
                        let id = egui::Id::new(("task_card", index));
                        if render_task_card(ui, id, &card.view(), card.state(), theme) {
                            pressed = Some(index);
                        }
                    }
                    ui.add_space(SCREEN_MARGIN);
                });
            });

        if let Some(index) = pressed {
            self.press(index, notifier);
        }
    }
}

/// Fill `rect` with a gradient running from the top-left to the
/// bottom-right corner.
fn paint_diagonal_gradient(painter: &egui::Painter, rect: Rect, start: Color32, end: Color32) {
    let mid = lerp_color(start, end, 0.5);
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), start);
    mesh.colored_vertex(rect.right_top(), mid);
    mesh.colored_vertex(rect.right_bottom(), end);
    mesh.colored_vertex(rect.left_bottom(), mid);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}
