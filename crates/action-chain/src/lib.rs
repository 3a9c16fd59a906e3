//! Snapshot-driven action composition for reactive game agents.
//!
//! An [`Action`] pairs a *generator* with an execution [`Policy`]. Every tick
//! the engine samples a fresh snapshot from the [`Environment`], hands it to
//! the generator, and executes whatever the generator yields:
//!
//! - **Step chains** yield atomic steps, executed in order by the environment
//! - **Action chains** yield sub-actions, each run to completion in order
//!
//! A generator stops its action by yielding no work. [`Yield::Done`] carries
//! a [`Status`] so callers can tell exhaustion from an abnormal stop; an empty
//! batch is treated the same as `Yield::Done(Status::Completed)`.
//!
//! # Architecture
//!
//! - [`Environment`]: snapshot source and step executor, supplied by the caller
//! - [`Action`]: generator + policy, owns its closed-over progress state
//! - [`Yield`] / [`Status`]: per-tick result and terminal status
//! - [`builder`]: shorthand constructors

pub mod action;
pub mod builder;
pub mod environment;
pub mod status;

// Re-export core types for ergonomic API
pub use action::{Action, Outcome, Policy};
pub use environment::Environment;
pub use status::{Status, Yield};
