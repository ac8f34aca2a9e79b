pub mod animation;
mod app;
pub mod card_rendering;
pub mod screen;
pub mod theme;

pub use app::RewardsApp;
