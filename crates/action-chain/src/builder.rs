//! Builder utilities for ergonomic action construction.
//!
//! Instead of writing `Action::steps(name, f).repeat_until_empty()`, you can
//! use shorter functions like `repeat_steps(name, f)`.

use std::borrow::Cow;

use crate::{Action, Yield};

/// Creates a step chain that repeats until its generator yields no work.
#[inline]
pub fn repeat_steps<S, T, F>(name: impl Into<Cow<'static, str>>, generator: F) -> Action<S, T>
where
    S: 'static,
    T: 'static,
    F: FnMut(&S) -> Yield<T> + Send + 'static,
{
    Action::steps(name, generator).repeat_until_empty()
}

/// Creates an action chain that repeats until its generator yields no work.
#[inline]
pub fn repeat_chain<S, T, F>(name: impl Into<Cow<'static, str>>, generator: F) -> Action<S, T>
where
    S: 'static,
    T: 'static,
    F: FnMut(&S) -> Yield<Action<S, T>> + Send + 'static,
{
    Action::chain(name, generator).repeat_until_empty()
}

/// Creates a run-once step chain that executes a fixed step.
///
/// The step is cloned on every invocation so the action stays reusable.
#[inline]
pub fn single_step<S, T>(name: impl Into<Cow<'static, str>>, step: T) -> Action<S, T>
where
    S: 'static,
    T: Clone + Send + 'static,
{
    Action::steps(name, move |_: &S| Yield::one(step.clone()))
}

/// Creates a run-once chain that yields a fixed list of sub-actions.
///
/// The sub-actions can only be handed out once; running the chain a second
/// time yields nothing.
#[inline]
pub fn sequence<S, T>(name: impl Into<Cow<'static, str>>, actions: Vec<Action<S, T>>) -> Action<S, T>
where
    S: 'static,
    T: 'static,
{
    let mut pending = Some(actions);
    Action::chain(name, move |_: &S| pending.take().map_or_else(Yield::done, Yield::Work))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Environment, Status};

    #[derive(Default)]
    struct Log {
        executed: Vec<&'static str>,
    }

    impl Environment for Log {
        type Snapshot = ();
        type Step = &'static str;

        fn snapshot(&mut self) {}

        fn execute(&mut self, step: &&'static str) {
            self.executed.push(*step);
        }
    }

    #[test]
    fn sequence_runs_children_once() {
        let mut env = Log::default();
        let mut seq = sequence(
            "seq",
            vec![single_step("a", "cast"), single_step("b", "attack")],
        );

        assert_eq!(seq.run(&mut env).status, Status::Completed);
        assert_eq!(env.executed, vec!["cast", "attack"]);

        // Second run has nothing left to hand out
        seq.run(&mut env);
        assert_eq!(env.executed.len(), 2);
    }

    #[test]
    fn repeat_chain_reinvokes_generator() {
        let mut env = Log::default();
        let mut rounds = 0;
        let mut chain = repeat_chain("rounds", move |_: &()| {
            rounds += 1;
            if rounds > 3 {
                Yield::done()
            } else {
                Yield::one(single_step("round", "wait"))
            }
        });

        let outcome = chain.run(&mut env);
        assert_eq!(outcome.ticks, 4);
        assert_eq!(env.executed, vec!["wait", "wait", "wait"]);
    }
}
