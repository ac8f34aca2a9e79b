//! Easing curves for card transitions.
//!
//! egui's animation helpers advance linearly; these functions reshape the
//! linear progress into the curves used by the cards.

use egui::Color32;

/// Seconds for the button spring after a press.
pub const SPRING_DURATION: f32 = 0.45;
/// Seconds for the countdown text fade after a tick.
pub const COUNTDOWN_FADE_DURATION: f32 = 0.3;
/// Lowest opacity the countdown text fades from.
pub const COUNTDOWN_MIN_OPACITY: f32 = 0.35;

const SPRING_DAMPING: f32 = 6.0;
const SPRING_FREQUENCY: f32 = 1.5;

/// Quadratic ease-in-out over `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Damped spring from 0 to 1. Overshoots past 1 before settling.
pub fn spring(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let decay = (-SPRING_DAMPING * t).exp();
    1.0 - decay * (std::f32::consts::TAU * SPRING_FREQUENCY * t).cos()
}

/// Spring applied to a bool animation. `progress` is egui's linear value
/// (1.0 = on), `on` is the target it is moving toward.
pub fn spring_toward(progress: f32, on: bool) -> f32 {
    if on {
        spring(progress)
    } else {
        1.0 - spring(1.0 - progress)
    }
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Per-channel blend between two colours; `t` is clamped to `[0, 1]`.
pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| lerp(a as f32, b as f32, t).round() as u8;
    Color32::from_rgba_unmultiplied(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
        channel(from.a(), to.a()),
    )
}

/// Opacity of the countdown text given how far the displayed value still
/// lags behind the real one (0 = caught up, 1 = a full second behind).
pub fn countdown_opacity(lag: f32) -> f32 {
    let settled = 1.0 - lag.abs().min(1.0);
    lerp(COUNTDOWN_MIN_OPACITY, 1.0, ease_in_out(settled))
}
