//! Time source abstraction.
//!
//! Everything time-dependent in the runtime (post-operation delays, skill
//! cooldown windows, boss search timeouts) goes through [`Clock`] so that it
//! can run against simulated time in tests and scenario replays.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Monotonic time source that can also block.
pub trait Clock: Send + Sync {
    /// Elapsed time since the clock's own epoch.
    fn now(&self) -> Duration;

    /// Blocks the calling thread for `duration`.
    fn sleep(&self, duration: Duration);

    /// Time elapsed since `earlier`, saturating at zero.
    fn since(&self, earlier: Duration) -> Duration {
        self.now().saturating_sub(earlier)
    }
}

/// Wall-clock time backed by [`Instant`] and [`thread::sleep`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Simulated time. Sleeping advances the clock instantly.
#[derive(Debug, Default)]
pub struct ManualClock {
    nanos: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock that starts at `start`.
    pub fn starting_at(start: Duration) -> Self {
        let clock = Self::new();
        clock.advance(start);
        clock
    }

    /// Moves simulated time forward.
    pub fn advance(&self, duration: Duration) {
        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        self.nanos.fetch_add(nanos, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}
