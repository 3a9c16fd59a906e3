//! Execution entry point for controller actions.
//!
//! The runtime pairs a [`GameReader`] with a [`StepExecutor`] and runs
//! [`BotAction`]s against them. It implements [`Environment`], so actions
//! sample a fresh snapshot from the reader on every tick and hand every
//! yielded step to the executor.

use action_chain::{Action, Environment, Outcome};
use game_core::GameData;

use crate::api::{GameReader, StepExecutor};
use crate::step::Step;

/// Action specialised to game snapshots and steps.
pub type BotAction = Action<GameData, Step>;

/// Drives actions against a live (or simulated) game.
///
/// Design: single logical thread of control. One action runs at a time and
/// every call blocks until the action finished.
pub struct Runtime<R, X> {
    reader: R,
    executor: X,
}

impl<R: GameReader, X: StepExecutor> Runtime<R, X> {
    pub fn new(reader: R, executor: X) -> Self {
        Self { reader, executor }
    }

    /// Runs `action` to completion according to its policy.
    pub fn run(&mut self, action: &mut BotAction) -> Outcome {
        tracing::debug!(action = action.name(), "running action");
        let outcome = action.run(self);
        tracing::debug!(
            action = action.name(),
            status = ?outcome.status,
            ticks = outcome.ticks,
            "action finished"
        );
        outcome
    }

    /// Samples a snapshot outside of any action, for audits and buff checks.
    pub fn game_data(&mut self) -> GameData {
        self.reader.game_data()
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn executor(&self) -> &X {
        &self.executor
    }

    /// Direct access to the executor, for input issued outside of actions.
    pub fn executor_mut(&mut self) -> &mut X {
        &mut self.executor
    }

    pub fn into_parts(self) -> (R, X) {
        (self.reader, self.executor)
    }
}

impl<R: GameReader, X: StepExecutor> Environment for Runtime<R, X> {
    type Snapshot = GameData;
    type Step = Step;

    fn snapshot(&mut self) -> GameData {
        self.reader.game_data()
    }

    fn execute(&mut self, step: &Step) {
        tracing::trace!(?step, "executing step");
        self.executor.execute(step);
    }
}
