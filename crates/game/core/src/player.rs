use bitflags::bitflags;

use crate::position::Position;

bitflags! {
    /// Status flags currently active on the player unit.
    ///
    /// Only the states the controllers branch on are tracked. `COOLDOWN` is
    /// the global skill cooldown some skills (Blizzard among them) put the
    /// player in; while it is set only the primary attack can be used.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PlayerStates: u16 {
        const COOLDOWN = 1 << 0;
    }
}

/// The controlled character as seen in one snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerUnit {
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub states: PlayerStates,
}

impl PlayerUnit {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            states: PlayerStates::empty(),
        }
    }

    /// Adds status flags (builder pattern).
    #[must_use]
    pub fn with_states(mut self, states: PlayerStates) -> Self {
        self.states |= states;
        self
    }

    #[inline]
    pub fn has_state(&self, state: PlayerStates) -> bool {
        self.states.contains(state)
    }

    /// Returns true while the global skill cooldown is active.
    #[inline]
    pub fn on_cooldown(&self) -> bool {
        self.has_state(PlayerStates::COOLDOWN)
    }
}
