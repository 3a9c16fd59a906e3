//! Humanized post-operation delays.

use std::time::Duration;

use rand::Rng;

/// Base pause after an operation, randomly extended on every use.
///
/// The effective delay adds a uniformly random surcharge of 1% up to (but
/// not including) 30% of the base, drawn fresh on every call so consecutive
/// operations never share a fixed cadence. The surcharge is drawn in whole
/// nanoseconds with both bounds rounded down, so bases of a few nanoseconds
/// get no surcharge at all.
///
/// Invariant: `base <= effective < base * 1.3` for any non-zero base; a zero
/// base always yields zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DelayPolicy {
    base: Duration,
}

impl DelayPolicy {
    /// Lowest surcharge, in percent of the base delay.
    pub const MIN_SURCHARGE_PERCENT: u128 = 1;

    /// Exclusive upper bound of the surcharge, in percent of the base delay.
    pub const MAX_SURCHARGE_PERCENT: u128 = 30;

    pub const fn new(base: Duration) -> Self {
        Self { base }
    }

    pub const fn base(&self) -> Duration {
        self.base
    }

    /// Draws an effective delay from `rng`.
    pub fn effective<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let nanos = self.base.as_nanos();
        let low = percent_of(nanos, Self::MIN_SURCHARGE_PERCENT);
        let high = percent_of(nanos, Self::MAX_SURCHARGE_PERCENT);
        if high <= low {
            return self.base;
        }
        self.base.saturating_add(Duration::from_nanos(rng.gen_range(low..high)))
    }
}

fn percent_of(nanos: u128, percent: u128) -> u64 {
    u64::try_from(nanos * percent / 100).unwrap_or(u64::MAX)
}
