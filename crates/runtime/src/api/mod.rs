//! Types the runtime exposes to (and expects from) the orchestration layer.
//!
//! - [`errors`]: the runtime error type
//! - [`providers`]: traits for the external collaborators the runtime drives
pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{GameReader, Pather, StepExecutor};
