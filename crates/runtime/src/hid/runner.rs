//! Timed operation runner.

use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{DelayPolicy, HidOperation, InputDevice};
use crate::clock::Clock;

/// Executes input operations in order, pausing after each one.
///
/// # Semantics
///
/// - Operations run strictly in input order, one at a time
/// - After each effect the runner blocks on its [`Clock`] for the operation's
///   [`DelayPolicy`]-derived delay before starting the next one
/// - Operation effects are infallible at this layer
///
/// The runner owns the only random source used for delay jitter. It is
/// seeded once when the runner is created.
pub struct OperationRunner<D> {
    device: D,
    clock: Arc<dyn Clock>,
    rng: StdRng,
}

impl<D: InputDevice> OperationRunner<D> {
    /// Creates a runner whose jitter source is seeded from OS entropy.
    pub fn new(device: D, clock: Arc<dyn Clock>) -> Self {
        Self::with_rng(device, clock, StdRng::from_entropy())
    }

    /// Creates a runner with an explicit jitter source.
    pub fn with_rng(device: D, clock: Arc<dyn Clock>, rng: StdRng) -> Self {
        Self { device, clock, rng }
    }

    /// Runs `sequence` to completion and returns the total time slept.
    pub fn run<I>(&mut self, sequence: I) -> Duration
    where
        I: IntoIterator,
        I::Item: HidOperation,
    {
        let mut slept = Duration::ZERO;
        for operation in sequence {
            operation.execute(&mut self.device);
            let delay = DelayPolicy::new(operation.base_delay()).effective(&mut self.rng);
            self.clock.sleep(delay);
            slept += delay;
        }
        slept
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }
}
