use std::time::Duration;

use crate::models::task::{CardMode, CardState, TaskCardSpec, DEFAULT_COUNTDOWN_SECONDS};
use crate::services::scheduler::{TickEvent, TickScheduler, TimerHandle};

use super::view::{card_view, CardView};

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Side effect requested by a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEffect {
    Claim,
    Share,
}

/// Controller for one reward task card.
///
/// Owns the card's mutable state and, while visible, the handle of its
/// countdown timer. Ticks are accepted only from the timer currently held.
#[derive(Debug)]
pub struct TaskCard {
    spec: TaskCardSpec,
    state: CardState,
    tick_period: Duration,
    timer: Option<TimerHandle>,
}

impl TaskCard {
    pub fn new(spec: TaskCardSpec) -> Self {
        Self::with_countdown(spec, DEFAULT_COUNTDOWN_SECONDS)
    }

    pub fn with_countdown(spec: TaskCardSpec, countdown_seconds: u32) -> Self {
        Self {
            spec,
            state: CardState::new(countdown_seconds),
            tick_period: ONE_SECOND,
            timer: None,
        }
    }

    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub fn spec(&self) -> &TaskCardSpec {
        &self.spec
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_some()
    }

    /// The card became visible. Claim cards (re)start their countdown timer.
    pub fn appear(&mut self, scheduler: &dyn TickScheduler) {
        if !self.spec.has_timer || self.state.remaining_seconds == 0 {
            return;
        }

        // Release the previous timer before acquiring a new one
        self.timer = None;
        let handle = scheduler.schedule_repeating(self.tick_period);
        log::debug!(
            "card '{}' started countdown at {}s (timer {:?})",
            self.spec.title,
            self.state.remaining_seconds,
            handle.id()
        );
        self.timer = Some(handle);
    }

    /// The card is no longer on screen. Any running timer is released.
    pub fn disappear(&mut self) {
        if let Some(handle) = self.timer.take() {
            log::debug!(
                "card '{}' hidden, cancelling timer {:?}",
                self.spec.title,
                handle.id()
            );
        }
    }

    /// Apply a timer tick. Returns `true` when the state changed.
    pub fn tick(&mut self, event: TickEvent) -> bool {
        let owns_timer = self
            .timer
            .as_ref()
            .is_some_and(|handle| handle.id() == event.timer_id);
        if !owns_timer {
            return false;
        }

        if self.state.remaining_seconds == 0 {
            self.timer = None;
            return false;
        }

        self.state.remaining_seconds -= 1;
        if self.state.remaining_seconds == 0 {
            log::info!("'{}' is ready to claim", self.spec.title);
            self.timer = None;
        }
        true
    }

    /// Toggle the tapped flag and report the side effect for this card.
    pub fn press(&mut self) -> CardEffect {
        self.state.tapped = !self.state.tapped;
        match self.spec.mode() {
            CardMode::Claim => CardEffect::Claim,
            CardMode::Share => CardEffect::Share,
        }
    }

    pub fn view(&self) -> CardView {
        card_view(&self.spec, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scheduler::ManualTickScheduler;

    fn claim_card() -> TaskCard {
        TaskCard::new(TaskCardSpec::new("Claim 10 Point Every Hour", 10, true, false))
    }

    fn share_card() -> TaskCard {
        TaskCard::new(TaskCardSpec::new("Share With 5 friends!", 10, false, false))
    }

    fn run_ticks(card: &mut TaskCard, scheduler: &ManualTickScheduler, rounds: usize) {
        for _ in 0..rounds {
            for event in scheduler.fire() {
                card.tick(event);
            }
        }
    }

    #[test]
    fn test_claim_card_counts_down_to_zero_and_stops() {
        let scheduler = ManualTickScheduler::new();
        let mut card = claim_card();
        card.appear(&scheduler);
        assert!(card.is_timer_running());

        run_ticks(&mut card, &scheduler, 3600);
        assert_eq!(card.state().remaining_seconds, 0);
        assert!(!card.is_timer_running());
        assert_eq!(scheduler.active_count(), 0);

        run_ticks(&mut card, &scheduler, 10);
        assert_eq!(card.state().remaining_seconds, 0);
    }

    #[test]
    fn test_share_card_never_schedules() {
        let scheduler = ManualTickScheduler::new();
        let mut card = share_card();
        card.appear(&scheduler);
        assert!(!card.is_timer_running());
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn test_hidden_card_ignores_queued_ticks() {
        let scheduler = ManualTickScheduler::new();
        let mut card = claim_card();
        card.appear(&scheduler);

        let queued = scheduler.fire();
        card.disappear();
        assert_eq!(scheduler.active_count(), 0);

        for event in queued {
            assert!(!card.tick(event));
        }
        run_ticks(&mut card, &scheduler, 5);
        assert_eq!(card.state().remaining_seconds, 3600);
    }

    #[test]
    fn test_reappear_replaces_timer_and_keeps_progress() {
        let scheduler = ManualTickScheduler::new();
        let mut card = claim_card();
        card.appear(&scheduler);
        run_ticks(&mut card, &scheduler, 3);

        let stale = scheduler.fire();
        card.appear(&scheduler);
        assert_eq!(scheduler.active_count(), 1);
        for event in stale {
            assert!(!card.tick(event));
        }

        run_ticks(&mut card, &scheduler, 2);
        assert_eq!(card.state().remaining_seconds, 3595);
    }

    #[test]
    fn test_press_alternates_tapped() {
        let mut card = share_card();
        assert_eq!(card.press(), CardEffect::Share);
        assert!(card.state().tapped);
        assert_eq!(card.press(), CardEffect::Share);
        assert!(!card.state().tapped);

        let mut claim = claim_card();
        assert_eq!(claim.press(), CardEffect::Claim);
        assert!(claim.state().tapped);
    }

    #[test]
    fn test_zero_countdown_does_not_start_timer() {
        let scheduler = ManualTickScheduler::new();
        let mut card = TaskCard::with_countdown(claim_card().spec().clone(), 0);
        card.appear(&scheduler);
        assert!(!card.is_timer_running());
    }

    #[test]
    fn test_custom_tick_period_is_requested() {
        let scheduler = ManualTickScheduler::new();
        let mut card = claim_card().with_tick_period(Duration::from_millis(500));
        card.appear(&scheduler);
        let id = scheduler.fire()[0].timer_id;
        assert_eq!(scheduler.period_of(id), Some(Duration::from_millis(500)));
    }
}
