//! The world an action runs against.
//!
//! The engine never reads or touches the game directly. It asks the
//! environment for a fresh snapshot before each generator call and hands it
//! each yielded step for execution.

/// Snapshot source and step executor for running actions.
///
/// # Contract
///
/// - [`snapshot`](Environment::snapshot) is called once per tick, always
///   after the previous tick's steps finished executing
/// - [`execute`](Environment::execute) blocks until the step completed,
///   including any delays the step itself imposes
pub trait Environment {
    /// Point-in-time view of the world handed to generators.
    type Snapshot;

    /// Atomic command a step chain yields.
    type Step;

    /// Samples the current world state.
    fn snapshot(&mut self) -> Self::Snapshot;

    /// Executes one step to completion.
    fn execute(&mut self, step: &Self::Step);
}

impl<E: Environment + ?Sized> Environment for &mut E {
    type Snapshot = E::Snapshot;
    type Step = E::Step;

    #[inline]
    fn snapshot(&mut self) -> Self::Snapshot {
        (**self).snapshot()
    }

    #[inline]
    fn execute(&mut self, step: &Self::Step) {
        (**self).execute(step)
    }
}
