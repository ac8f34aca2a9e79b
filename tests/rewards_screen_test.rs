// Integration tests for the rewards screen composition and lifecycle
use pretty_assertions::assert_eq;
use reward_tasks::models::settings::AppSettings;
use reward_tasks::services::countdown::CardEffect;
use reward_tasks::services::notification::TaskNotifier;
use reward_tasks::models::task::TaskCardSpec;
use reward_tasks::services::scheduler::ManualTickScheduler;
use reward_tasks::ui_egui::screen::RewardsScreen;
use std::cell::RefCell;

#[derive(Default)]
struct RecordingNotifier {
    calls: RefCell<Vec<String>>,
}

impl TaskNotifier for RecordingNotifier {
    fn on_claim(&self, task: &TaskCardSpec) {
        self.calls.borrow_mut().push(format!("claim:{}", task.title));
    }

    fn on_share(&self, task: &TaskCardSpec) {
        self.calls.borrow_mut().push(format!("share:{}", task.title));
    }
}

#[test]
fn test_screen_shows_three_cards_in_order() {
    let screen = RewardsScreen::from_settings(&AppSettings::default());
    let views: Vec<(String, bool, Option<String>, String, &str)> = screen
        .cards()
        .iter()
        .map(|card| {
            let view = card.view();
            (
                view.title,
                view.show_trophy,
                view.countdown_text,
                view.points_text,
                view.button.label,
            )
        })
        .collect();

    assert_eq!(
        views,
        vec![
            (
                "Monthly Leaderboard Winner".to_string(),
                true,
                None,
                "100 Points".to_string(),
                "Share"
            ),
            (
                "Share With 5 friends!".to_string(),
                false,
                None,
                "10 Points".to_string(),
                "Share"
            ),
            (
                "Claim 10 Point Every Hour".to_string(),
                false,
                Some("Next claim in: 00 min 00 sec".to_string()),
                "10 Points".to_string(),
                "Claim Now"
            ),
        ]
    );
}

#[test]
fn test_presses_notify_by_mode() {
    let notifier = RecordingNotifier::default();
    let mut screen = RewardsScreen::from_settings(&AppSettings::default());

    assert_eq!(screen.press(0, &notifier), Some(CardEffect::Share));
    assert_eq!(screen.press(2, &notifier), Some(CardEffect::Claim));
    assert_eq!(screen.press(1, &notifier), Some(CardEffect::Share));

    assert_eq!(
        notifier.calls.into_inner(),
        vec![
            "share:Monthly Leaderboard Winner".to_string(),
            "claim:Claim 10 Point Every Hour".to_string(),
            "share:Share With 5 friends!".to_string(),
        ]
    );
}

#[test]
fn test_hide_and_show_resumes_countdown() {
    let scheduler = ManualTickScheduler::new();
    let mut screen = RewardsScreen::from_settings(&AppSettings::default());

    screen.appear(&scheduler);
    for _ in 0..5 {
        for event in scheduler.fire() {
            screen.dispatch_tick(event);
        }
    }

    screen.disappear();
    assert!(!screen.is_visible());
    assert_eq!(scheduler.active_count(), 0);
    assert!(scheduler.fire().is_empty());

    screen.appear(&scheduler);
    for event in scheduler.fire() {
        screen.dispatch_tick(event);
    }
    assert_eq!(screen.cards()[2].state().remaining_seconds, 3594);
}

#[test]
fn test_countdown_from_settings() {
    let settings = AppSettings {
        countdown_seconds: 90,
        ..AppSettings::default()
    };
    let screen = RewardsScreen::from_settings(&settings);
    assert_eq!(
        screen.cards()[2].view().countdown_text.as_deref(),
        Some("Next claim in: 01 min 30 sec")
    );
}
