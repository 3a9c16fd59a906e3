//! Bot runtime for reactive, snapshot-driven game agents.
//!
//! This crate wires the action composition engine to a game: it defines the
//! step vocabulary, the collaborator traits a game integration supplies, the
//! character controllers that turn snapshots into steps, and the timed input
//! runner that turns steps into human-paced device input. Consumers embed
//! [`Runtime`] to run [`BotAction`]s built by a [`Character`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the action runner and the snapshot/step adapter
//! - [`api`] exposes the collaborator traits and error types
//! - [`character`] holds the per-archetype controllers
//! - [`hid`] executes low-level input operations with randomized pauses
//! - [`clock`] abstracts time so timeouts and pauses can be simulated
//! - [`config`] loads controller tuning
pub mod api;
pub mod character;
pub mod clock;
pub mod config;
pub mod hid;
pub mod pather;
pub mod runtime;
pub mod step;

pub use api::{GameReader, Pather, Result, RuntimeError, StepExecutor};
pub use character::{
    BaseCharacter, BlizzardSorceress, Character, MonsterSelector, Requirement,
    audit_key_bindings, ensure_key_bindings,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SorceressConfig;
pub use hid::{
    DelayPolicy, HidOperation, InputDevice, KeyPress, MouseButton, MouseClick, MouseDisplacement,
    OperationRunner,
};
pub use pather::StraightLinePather;
pub use runtime::{BotAction, Runtime};
pub use step::{Distance, Step};
