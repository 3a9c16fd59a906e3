//! Per-tick generator results and terminal action status.

/// How an action finished.
///
/// None of these are errors: a finished action simply yielded no more work.
/// The distinction exists so orchestration can decide whether to retry,
/// move on, or report a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Nothing left to do: no target remains or the goal was reached.
    Completed,

    /// The generator could not make progress this tick (for example the
    /// target failed pre-engagement validation). The action ends, and the
    /// orchestrator may construct a new one to retry.
    Stalled,

    /// The generator abandoned its goal: an iteration cap or a timeout was
    /// reached before the goal was met.
    GaveUp,
}

impl Status {
    /// Returns `true` if this status is `Completed`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Completed)
    }

    /// Returns `true` for stops that are not plain exhaustion.
    #[inline]
    pub fn is_abnormal(self) -> bool {
        !self.is_success()
    }
}

/// What a generator produced for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Yield<T> {
    /// Work to execute this tick, in order.
    Work(Vec<T>),

    /// No more work; the action terminates with the given status.
    Done(Status),
}

impl<T> Yield<T> {
    /// A single unit of work.
    pub fn one(item: T) -> Self {
        Yield::Work(vec![item])
    }

    /// Terminates the action as completed.
    pub fn done() -> Self {
        Yield::Done(Status::Completed)
    }

    /// Terminates the action as stalled.
    pub fn stalled() -> Self {
        Yield::Done(Status::Stalled)
    }

    /// Terminates the action as given up.
    pub fn gave_up() -> Self {
        Yield::Done(Status::GaveUp)
    }

    /// Splits into the batch to execute or the terminal status.
    ///
    /// An empty batch terminates the action as `Completed`.
    pub fn into_batch(self) -> Result<Vec<T>, Status> {
        match self {
            Yield::Work(items) if items.is_empty() => Err(Status::Completed),
            Yield::Work(items) => Ok(items),
            Yield::Done(status) => Err(status),
        }
    }

    /// Returns `true` if this yield ends the action.
    pub fn is_done(&self) -> bool {
        match self {
            Yield::Work(items) => items.is_empty(),
            Yield::Done(_) => true,
        }
    }
}

impl<T> From<Vec<T>> for Yield<T> {
    fn from(items: Vec<T>) -> Self {
        Yield::Work(items)
    }
}
