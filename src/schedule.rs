use std::time::Duration;
use std::time::Instant;

use tracing::debug;

/// Fixed interval scheduler.
///
/// The ticker never sleeps or spawns anything. The caller asks how long it may wait
/// ([`until_next`](Ticker::until_next)), waits however it likes, then asks whether a tick is due
/// ([`poll`](Ticker::poll)). Time is always passed in, so the ticker can be driven by a fake clock.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,

    /// Deadline of the next tick. `None` while stopped.
    next: Option<Instant>,
}

impl Ticker {
    /// A stopped ticker.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Start ticking, with the first tick one interval after `now`. Restarts a running ticker.
    pub fn start(&mut self, now: Instant) {
        debug!(interval = ?self.interval, "Ticker started");

        self.next = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        debug!("Ticker stopped");

        self.next = None;
    }

    /// Start a stopped ticker or stop a running one. Returns whether it is now running.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start(now);
        }

        self.is_running()
    }

    /// Time left before the next tick, zero if one is overdue, `None` when stopped.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next.map(|next| next.saturating_duration_since(now))
    }

    /// Whether a tick is due at `now`. A due tick is consumed and the next one is scheduled one
    /// interval after `now`, so ticks missed while the caller was busy are dropped, not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now >= next => {
                self.next = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
