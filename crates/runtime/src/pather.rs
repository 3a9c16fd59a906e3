//! Distance queries against the current snapshot.

use game_core::{GameData, Position};

use crate::api::Pather;

/// Pather that measures straight-line distance from the player.
///
/// Ignores walls and terrain. Good enough for proximity checks on open
/// ground and for simulated worlds; a map-aware pather should be supplied
/// when path length matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLinePather;

impl Pather for StraightLinePather {
    fn distance_from_me(&self, data: &GameData, position: Position) -> u32 {
        data.player_unit.position.distance_to(position)
    }
}
