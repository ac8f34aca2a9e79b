//! Repeating tick timers for card countdowns.
//!
//! A scheduler hands out a [`TimerHandle`] for every repeating timer it
//! starts. The handle owns the timer: dropping it (or calling
//! [`TimerHandle::cancel`]) stops the timer synchronously. Ticks are not
//! applied where they are produced; they are delivered as [`TickEvent`]s and
//! the UI thread routes them to whichever card holds the matching
//! [`TimerId`].

mod manual;
mod tokio_scheduler;

pub use manual::ManualTickScheduler;
pub use tokio_scheduler::{TickReceiver, TokioTickScheduler};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Identifies one scheduled timer for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// One elapsed period of a repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvent {
    pub timer_id: TimerId,
}

pub trait TickScheduler {
    /// Start a timer that fires every `period` until its handle is dropped.
    fn schedule_repeating(&self, period: Duration) -> TimerHandle;
}

/// Owned cancellation token for a scheduled timer.
#[derive(Debug)]
pub struct TimerHandle {
    id: TimerId,
    cancelled: Arc<AtomicBool>,
    task: Option<tokio::task::AbortHandle>,
}

impl TimerHandle {
    pub(crate) fn new(
        id: TimerId,
        cancelled: Arc<AtomicBool>,
        task: Option<tokio::task::AbortHandle>,
    ) -> Self {
        Self {
            id,
            cancelled,
            task,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub fn cancel(self) {
        // Drop does the work
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(task) = self.task.take() {
            task.abort();
        }
        log::debug!("timer {:?} released", self.id);
    }
}
