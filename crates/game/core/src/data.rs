//! Point-in-time snapshot of everything the agent can observe.

use crate::keybinding::KeyBindings;
use crate::monster::Monsters;
use crate::player::PlayerUnit;

/// One world snapshot.
///
/// Snapshots are cheap to clone and never mutated by the decision layer.
/// The runtime samples a fresh one before every generator invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameData {
    pub player_unit: PlayerUnit,
    #[cfg_attr(feature = "serde", serde(default))]
    pub monsters: Monsters,
    #[cfg_attr(feature = "serde", serde(default))]
    pub key_bindings: KeyBindings,
}

impl GameData {
    pub fn new(player_unit: PlayerUnit, monsters: Monsters, key_bindings: KeyBindings) -> Self {
        Self {
            player_unit,
            monsters,
            key_bindings,
        }
    }
}
