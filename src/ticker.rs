use std::time::{Duration, Instant};

/// Fixed-cadence deadline timer driven by the event loop.
///
/// The loop sleeps until [`Ticker::deadline`] and then calls
/// [`Ticker::poll`]; nothing here blocks or spawns.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn deadline(&self) -> Instant {
        self.next_due
    }

    /// Returns true at most once per elapsed deadline. After a stall
    /// longer than one interval the schedule restarts from `now` rather
    /// than firing the missed ticks back to back.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        true
    }
}
