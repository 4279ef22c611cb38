//! Pull-based tick scheduling.

use std::time::{Duration, Instant};

/// A due tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInfo {
    /// Whole intervals that elapsed without a tick and were dropped.
    pub skipped: u32,
}

/// Decides when the next sample is due.
///
/// The caller polls with the current time. Missed ticks are never queued:
/// a late poll yields a single tick and reports how many were dropped, and
/// the next deadline is re-anchored one interval after that poll.
///
/// ```rust
/// use huepick_sample::TickScheduler;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let mut ticks = TickScheduler::new(10.0, start);
/// assert!(ticks.poll(start).is_some());
/// assert!(ticks.poll(start + Duration::from_millis(50)).is_none());
///
/// let late = ticks.poll(start + Duration::from_millis(450)).unwrap();
/// assert_eq!(late.skipped, 3);
/// ```
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    next: Instant,
}

impl TickScheduler {
    /// Scheduler at `rate_hz`, with the first tick due at `start`.
    ///
    /// The rate is expected to be validated already; a non-positive or NaN
    /// rate falls back to 1 Hz.
    pub fn new(rate_hz: f32, start: Instant) -> Self {
        Self {
            interval: interval_for(rate_hz),
            next: start,
        }
    }

    /// Current interval between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Changes the rate. The pending deadline is kept.
    pub fn set_rate(&mut self, rate_hz: f32) {
        self.interval = interval_for(rate_hz);
    }

    /// Returns a tick if one is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<TickInfo> {
        if now < self.next {
            return None;
        }
        let late = now.duration_since(self.next);
        let skipped = (late.as_nanos() / self.interval.as_nanos().max(1)).min(u32::MAX as u128) as u32;
        self.next = now + self.interval;
        Some(TickInfo { skipped })
    }
}

fn interval_for(rate_hz: f32) -> Duration {
    let rate = if rate_hz.is_finite() && rate_hz > 0.0 { rate_hz } else { 1.0 };
    Duration::from_secs_f64(1.0 / rate as f64)
}
