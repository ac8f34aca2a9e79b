use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::{TickEvent, TickScheduler, TimerHandle, TimerId};

pub type TickReceiver = mpsc::UnboundedReceiver<TickEvent>;

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Runs each repeating timer as a task on a tokio runtime and forwards its
/// ticks over a channel to the thread that owns the cards.
pub struct TokioTickScheduler {
    runtime: Handle,
    sender: mpsc::UnboundedSender<TickEvent>,
    next_id: AtomicU64,
    waker: Option<Waker>,
}

impl TokioTickScheduler {
    pub fn new(runtime: Handle) -> (Self, TickReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            runtime,
            sender,
            next_id: AtomicU64::new(1),
            waker: None,
        };
        (scheduler, receiver)
    }

    /// Called after every delivered tick, e.g. to request a repaint.
    pub fn with_waker(mut self, waker: impl Fn() + Send + Sync + 'static) -> Self {
        self.waker = Some(Arc::new(waker));
        self
    }
}

impl TickScheduler for TokioTickScheduler {
    fn schedule_repeating(&self, period: Duration) -> TimerHandle {
        let id = TimerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let cancelled = Arc::new(AtomicBool::new(false));

        let flag = cancelled.clone();
        let sender = self.sender.clone();
        let waker = self.waker.clone();
        let task = self.runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if flag.load(Ordering::Acquire) {
                    break;
                }
                if sender.send(TickEvent { timer_id: id }).is_err() {
                    log::debug!("tick receiver closed, stopping timer {:?}", id);
                    break;
                }
                if let Some(waker) = &waker {
                    waker();
                }
            }
        });

        log::debug!("scheduled timer {:?} every {:?}", id, period);
        TimerHandle::new(id, cancelled, Some(task.abort_handle()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn drain(receiver: &mut TickReceiver) -> Vec<TickEvent> {
        let mut events = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let (scheduler, mut receiver) = TokioTickScheduler::new(Handle::current());
        let handle = scheduler.schedule_repeating(Duration::from_secs(1));

        tokio::time::sleep(Duration::from_millis(3500)).await;

        let events = drain(&mut receiver);
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.timer_id == handle.id()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_after_handle_dropped() {
        let (scheduler, mut receiver) = TokioTickScheduler::new(Handle::current());
        let handle = scheduler.schedule_repeating(Duration::from_secs(1));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(drain(&mut receiver).len(), 1);

        drop(handle);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(drain(&mut receiver).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_waker_runs_per_tick() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = wakes.clone();
        let (scheduler, _receiver) = TokioTickScheduler::new(Handle::current());
        let scheduler = scheduler.with_waker(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let _handle = scheduler.schedule_repeating(Duration::from_secs(1));
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(wakes.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_are_unique() {
        let (scheduler, _receiver) = TokioTickScheduler::new(Handle::current());
        let a = scheduler.schedule_repeating(Duration::from_secs(1));
        let b = scheduler.schedule_repeating(Duration::from_secs(1));
        assert_ne!(a.id(), b.id());
    }
}
