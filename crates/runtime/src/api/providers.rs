//! External collaborators consumed by the runtime.
//!
//! Runtime users plug in implementations of these traits so the same
//! controllers can drive the real game client, a recorded session, or a
//! scripted test world.
use game_core::{GameData, Position};

use crate::step::Step;

/// Source of world snapshots.
///
/// Must be cheap to call repeatedly. Every call returns a fresh,
/// independent snapshot; the runtime never mutates what it receives.
pub trait GameReader {
    fn game_data(&mut self) -> GameData;
}

/// Step execution layer.
///
/// Executes one step to completion, including its own movement, input and
/// timing, before returning. There is no failure signal: an attack that
/// could not land simply leaves the world unchanged, which the next snapshot
/// will show.
pub trait StepExecutor {
    fn execute(&mut self, step: &Step);
}

/// Pathing and distance service.
pub trait Pather: Send + Sync {
    /// Distance from the player to `position` in the given snapshot.
    fn distance_from_me(&self, data: &GameData, position: Position) -> u32;
}
