//! Painting of a single reward task card.

use egui::text::LayoutJob;
use egui::{Color32, FontId, RichText, TextFormat};

use crate::models::task::CardState;
use crate::services::countdown::{ButtonTone, CardView, IDLE_BUTTON_SCALE, TAPPED_BUTTON_SCALE};

use super::animation::{
    countdown_opacity, lerp, lerp_color, spring_toward, COUNTDOWN_FADE_DURATION, SPRING_DURATION,
};
use super::theme::RewardsTheme;

// Card rendering constants
pub const CARD_CONTENT_WIDTH: f32 = 300.0;
pub const CARD_CONTENT_HEIGHT: f32 = 150.0;
pub const CARD_PADDING: f32 = 16.0;
const CARD_ROUNDING: f32 = 15.0;
const CARD_ITEM_SPACING: f32 = 10.0;
const TROPHY_SIZE: f32 = 30.0;
const TITLE_SIZE: f32 = 17.0;
const COUNTDOWN_SIZE: f32 = 15.0;
const POINTS_SIZE: f32 = 17.0;
const BUTTON_TEXT_SIZE: f32 = 16.0;
const BUTTON_ROUNDING: f32 = 5.0;
const BUTTON_MIN_SIZE: egui::Vec2 = egui::vec2(96.0, 36.0);

/// Outer size of a card including its padding.
pub fn card_outer_size() -> egui::Vec2 {
    egui::vec2(
        CARD_CONTENT_WIDTH + 2.0 * CARD_PADDING,
        CARD_CONTENT_HEIGHT + 2.0 * CARD_PADDING,
    )
}

/// Paint a card from its view description. Returns `true` when the button
/// was clicked this frame.
pub fn render_task_card(
    ui: &mut egui::Ui,
    id: egui::Id,
    view: &CardView,
    state: &CardState,
    theme: &RewardsTheme,
) -> bool {
    let ctx = ui.ctx().clone();
    let card_fill = lerp_color(theme.card_start, theme.card_end, 0.5);

    let frame = egui::Frame::none()
        .fill(card_fill)
        .rounding(CARD_ROUNDING)
        .inner_margin(egui::Margin::same(CARD_PADDING))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(0.0, 2.0),
            blur: 5.0,
            spread: 0.0,
            color: theme.card_shadow,
        });

    let inner = frame.show(ui, |ui| {
        ui.set_width(CARD_CONTENT_WIDTH);
        ui.set_height(CARD_CONTENT_HEIGHT);

        ui.vertical_centered(|ui| {
            ui.spacing_mut().item_spacing.y = CARD_ITEM_SPACING;

            ui.label(title_job(view, theme));

            if let Some(text) = &view.countdown_text {
                let shown = ctx.animate_value_with_time(
                    id.with("countdown"),
                    state.remaining_seconds as f32,
                    COUNTDOWN_FADE_DURATION,
                );
                let opacity = countdown_opacity(state.remaining_seconds as f32 - shown);
                ui.label(
                    RichText::new(text)
                        .size(COUNTDOWN_SIZE)
                        .color(theme.countdown_text.gamma_multiply(opacity)),
                );
            }

            ui.label(
                RichText::new(&view.points_text)
                    .size(POINTS_SIZE)
                    .strong()
                    .color(theme.points_text),
            );

            let (fill, scale) = animated_button(&ctx, id, view, state.tapped, theme);
            let button = egui::Button::new(
                RichText::new(view.button.label)
                    .size(BUTTON_TEXT_SIZE * scale)
                    .color(theme.button_text),
            )
            .fill(fill)
            .rounding(BUTTON_ROUNDING)
            .min_size(BUTTON_MIN_SIZE * scale);

            ui.add(button).clicked()
        })
        .inner
    });

    inner.inner
}

/// Trophy (for winners) followed by the title, centred as one line.
fn title_job(view: &CardView, theme: &RewardsTheme) -> LayoutJob {
    let mut job = LayoutJob::default();
    if view.show_trophy {
        job.append(
            "🏆",
            0.0,
            TextFormat {
                font_id: FontId::proportional(TROPHY_SIZE),
                color: theme.trophy,
                valign: egui::Align::Center,
                ..Default::default()
            },
        );
    }
    job.append(
        &view.title,
        if view.show_trophy { 8.0 } else { 0.0 },
        TextFormat {
            font_id: FontId::proportional(TITLE_SIZE),
            color: theme.title_text,
            valign: egui::Align::Center,
            ..Default::default()
        },
    );
    job.halign = egui::Align::Center;
    job
}

/// Button fill and scale, sprung between the idle and tapped looks.
fn animated_button(
    ctx: &egui::Context,
    id: egui::Id,
    view: &CardView,
    tapped: bool,
    theme: &RewardsTheme,
) -> (Color32, f32) {
    let progress = ctx.animate_bool_with_time(id.with("tap"), tapped, SPRING_DURATION);
    let settled = if tapped { progress >= 1.0 } else { progress <= 0.0 };
    if settled {
        return (theme.button_fill(view.button.tone), view.button.scale);
    }

    let eased = spring_toward(progress, tapped);
    let fill = lerp_color(
        theme.button_fill(ButtonTone::Idle),
        theme.button_fill(ButtonTone::Tapped),
        eased,
    );
    let scale = lerp(IDLE_BUTTON_SCALE, TAPPED_BUTTON_SCALE, eased);
    (fill, scale)
}
