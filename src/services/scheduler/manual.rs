use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{TickEvent, TickScheduler, TimerHandle, TimerId};

#[derive(Debug)]
struct ManualTimer {
    id: TimerId,
    period: Duration,
    cancelled: Arc<AtomicBool>,
}

/// Scheduler driven by the caller instead of a clock.
///
/// Every call to [`ManualTickScheduler::fire`] produces one tick for each
/// timer whose handle is still alive. Cancelled timers are forgotten.
#[derive(Debug, Default)]
pub struct ManualTickScheduler {
    timers: Mutex<Vec<ManualTimer>>,
    next_id: AtomicU64,
}

impl ManualTickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one tick for every live timer, in scheduling order.
    pub fn fire(&self) -> Vec<TickEvent> {
        let mut timers = self.lock_timers();
        timers.retain(|timer| !timer.cancelled.load(Ordering::Acquire));
        timers
            .iter()
            .map(|timer| TickEvent { timer_id: timer.id })
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.lock_timers()
            .iter()
            .filter(|timer| !timer.cancelled.load(Ordering::Acquire))
            .count()
    }

    /// Period requested for a timer, if it is still alive.
    pub fn period_of(&self, id: TimerId) -> Option<Duration> {
        self.lock_timers()
            .iter()
            .find(|timer| timer.id == id && !timer.cancelled.load(Ordering::Acquire))
            .map(|timer| timer.period)
    }

    fn lock_timers(&self) -> std::sync::MutexGuard<'_, Vec<ManualTimer>> {
        self.timers.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TickScheduler for ManualTickScheduler {
    fn schedule_repeating(&self, period: Duration) -> TimerHandle {
        let id = TimerId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let cancelled = Arc::new(AtomicBool::new(false));
        self.lock_timers().push(ManualTimer {
            id,
            period,
            cancelled: cancelled.clone(),
        });
        TimerHandle::new(id, cancelled, None)
    }
}
