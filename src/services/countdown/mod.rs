mod card;
mod format;
mod view;

pub use card::{CardEffect, TaskCard};
pub use format::{countdown_caption, format_countdown, points_caption};
pub use view::{
    card_view, ButtonTone, ButtonView, CardView, IDLE_BUTTON_SCALE, TAPPED_BUTTON_SCALE,
};
