//! The action composition primitive.
//!
//! An [`Action`] owns a generator closure together with whatever progress
//! state that closure captured. The state lives exactly as long as the action:
//! constructing a new action is the only way to reset it.

use std::borrow::Cow;
use std::fmt;

use crate::{Environment, Status, Yield};

type StepGenerator<S, T> = Box<dyn FnMut(&S) -> Yield<T> + Send>;
type ChainGenerator<S, T> = Box<dyn FnMut(&S) -> Yield<Action<S, T>> + Send>;

/// Whether the generator is invoked once or until it yields no work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// Invoke the generator a single time and execute what it yields.
    #[default]
    Once,

    /// Keep invoking the generator, with a fresh snapshot each time, until it
    /// yields no work.
    RepeatUntilEmpty,
}

enum Generator<S, T> {
    Steps(StepGenerator<S, T>),
    Chain(ChainGenerator<S, T>),
}

/// Result of running an action to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,

    /// Number of generator invocations, including the terminating one.
    pub ticks: u32,
}

/// A named, repeatable unit of work.
///
/// # Semantics
///
/// Each tick:
/// 1. Sample a snapshot from the environment
/// 2. Invoke the generator with it
/// 3. If the generator yields no work, the action finishes with the yielded
///    [`Status`] (`Completed` for an empty batch)
/// 4. Otherwise execute the batch in order: steps through
///    [`Environment::execute`], sub-actions by running each to completion
/// 5. Under [`Policy::Once`] finish as `Completed`; under
///    [`Policy::RepeatUntilEmpty`] go back to 1
///
/// The engine never decides on its own that an action is done. A repeating
/// generator must eventually yield no work, typically by detecting that no
/// target remains, that a goal was met, or that it gave up.
pub struct Action<S, T> {
    name: Cow<'static, str>,
    policy: Policy,
    generator: Generator<S, T>,
}

impl<S: 'static, T: 'static> Action<S, T> {
    /// Creates a step-chain action that runs its generator once.
    pub fn steps<F>(name: impl Into<Cow<'static, str>>, generator: F) -> Self
    where
        F: FnMut(&S) -> Yield<T> + Send + 'static,
    {
        Self {
            name: name.into(),
            policy: Policy::Once,
            generator: Generator::Steps(Box::new(generator)),
        }
    }

    /// Creates a multi-action chain that runs its generator once.
    pub fn chain<F>(name: impl Into<Cow<'static, str>>, generator: F) -> Self
    where
        F: FnMut(&S) -> Yield<Action<S, T>> + Send + 'static,
    {
        Self {
            name: name.into(),
            policy: Policy::Once,
            generator: Generator::Chain(Box::new(generator)),
        }
    }
}

impl<S, T> Action<S, T> {
    /// Switches the action to [`Policy::RepeatUntilEmpty`] (builder pattern).
    #[must_use]
    pub fn repeat_until_empty(self) -> Self {
        self.with_policy(Policy::RepeatUntilEmpty)
    }

    /// Sets the execution policy (builder pattern).
    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns `true` for multi-action chains.
    pub fn is_chain(&self) -> bool {
        matches!(self.generator, Generator::Chain(_))
    }

    /// Runs the action to completion against `env`.
    ///
    /// Blocks for as long as the executed steps block. Never fails: every
    /// stop, normal or not, is reported through [`Outcome::status`].
    pub fn run<E>(&mut self, env: &mut E) -> Outcome
    where
        E: Environment<Snapshot = S, Step = T> + ?Sized,
    {
        let mut ticks = 0u32;

        let status = loop {
            ticks = ticks.saturating_add(1);
            if let Err(status) = self.tick(env) {
                break status;
            }
            if self.policy == Policy::Once {
                break Status::Completed;
            }
        };

        match status {
            Status::Completed => {
                tracing::debug!(action = %self.name, ticks, "action completed");
            }
            Status::Stalled => {
                tracing::warn!(action = %self.name, ticks, "action stalled without progress");
            }
            Status::GaveUp => {
                tracing::warn!(action = %self.name, ticks, "action gave up");
            }
        }

        Outcome { status, ticks }
    }

    /// One generator invocation plus execution of its batch.
    fn tick<E>(&mut self, env: &mut E) -> Result<(), Status>
    where
        E: Environment<Snapshot = S, Step = T> + ?Sized,
    {
        let snapshot = env.snapshot();

        match &mut self.generator {
            Generator::Steps(generate) => {
                let steps = generate(&snapshot).into_batch()?;
                drop(snapshot);
                for step in &steps {
                    env.execute(step);
                }
            }
            Generator::Chain(generate) => {
                let actions = generate(&snapshot).into_batch()?;
                drop(snapshot);
                for mut action in actions {
                    let outcome = action.run(env);
                    tracing::trace!(
                        parent = %self.name,
                        child = %action.name,
                        status = ?outcome.status,
                        "sub-action finished"
                    );
                }
            }
        }

        Ok(())
    }
}

impl<S, T> fmt::Debug for Action<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("chain", &self.is_chain())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Snapshot is the remaining target count; each executed step kills one.
    struct Countdown {
        remaining: u32,
        snapshots: u32,
        executed: Vec<u32>,
    }

    impl Countdown {
        fn new(remaining: u32) -> Self {
            Self {
                remaining,
                snapshots: 0,
                executed: Vec::new(),
            }
        }
    }

    impl Environment for Countdown {
        type Snapshot = u32;
        type Step = u32;

        fn snapshot(&mut self) -> u32 {
            self.snapshots += 1;
            self.remaining
        }

        fn execute(&mut self, step: &u32) {
            self.remaining = self.remaining.saturating_sub(1);
            self.executed.push(*step);
        }
    }

    fn kill_one() -> Action<u32, u32> {
        Action::steps("kill one", |remaining: &u32| {
            if *remaining == 0 {
                Yield::done()
            } else {
                Yield::one(*remaining)
            }
        })
    }

    #[test]
    fn once_policy_invokes_generator_a_single_time() {
        let mut env = Countdown::new(3);
        let outcome = kill_one().run(&mut env);

        assert_eq!(outcome, Outcome { status: Status::Completed, ticks: 1 });
        assert_eq!(env.executed, vec![3]);
    }

    #[test]
    fn repeat_until_empty_runs_until_generator_yields_nothing() {
        let mut env = Countdown::new(3);
        let outcome = kill_one().repeat_until_empty().run(&mut env);

        assert_eq!(outcome.status, Status::Completed);
        assert_eq!(outcome.ticks, 4);
        assert_eq!(env.executed, vec![3, 2, 1]);
        assert_eq!(env.snapshots, 4);
    }

    #[test]
    fn steps_within_a_batch_run_in_order() {
        let mut env = Countdown::new(10);
        let mut action = Action::steps("batch", |_: &u32| Yield::Work(vec![7, 8, 9]));
        action.run(&mut env);

        assert_eq!(env.executed, vec![7, 8, 9]);
    }

    #[test]
    fn progress_state_caps_iterations() {
        const CAP: u32 = 5;
        let mut env = Countdown::new(u32::MAX);
        let mut loops = 0;
        let mut action = Action::steps("capped", move |_: &u32| {
            if loops >= CAP {
                return Yield::gave_up();
            }
            loops += 1;
            Yield::one(loops)
        })
        .repeat_until_empty();

        let outcome = action.run(&mut env);
        assert_eq!(outcome.status, Status::GaveUp);
        assert!(outcome.ticks <= CAP + 1);
        assert_eq!(env.executed.len(), CAP as usize);
    }

    #[test]
    fn chain_runs_each_sub_action_to_completion_in_order() {
        let mut env = Countdown::new(4);
        let mut first_pass = true;
        let mut chain = Action::chain("chain", move |_: &u32| {
            if !first_pass {
                return Yield::done();
            }
            first_pass = false;
            Yield::Work(vec![
                Action::steps("marker", |_: &u32| Yield::one(100)),
                kill_one().repeat_until_empty(),
            ])
        })
        .repeat_until_empty();

        let outcome = chain.run(&mut env);
        assert_eq!(outcome.status, Status::Completed);
        assert_eq!(outcome.ticks, 2);
        assert_eq!(env.executed, vec![100, 3, 2, 1]);
        assert_eq!(env.remaining, 0);
    }

    #[test]
    fn stalled_generator_reports_no_progress() {
        let mut env = Countdown::new(1);
        let mut action = Action::steps("blocked", |_: &u32| Yield::<u32>::stalled())
            .repeat_until_empty();

        let outcome = action.run(&mut env);
        assert_eq!(outcome, Outcome { status: Status::Stalled, ticks: 1 });
        assert!(env.executed.is_empty());
    }
}
