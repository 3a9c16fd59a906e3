//! Elemental resistances and immunities.
//!
//! A monster is immune to an element once its resistance reaches
//! [`Resists::IMMUNITY_THRESHOLD`]. Controllers use immunities both to skip
//! targets entirely and to reorder target priority.

use strum::EnumCount;

/// Damage element a monster can resist.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Resist {
    Physical,
    Magic,
    Fire,
    Cold,
    Lightning,
    Poison,
}

impl Resist {
    const fn index(self) -> usize {
        self as usize
    }
}

/// Resistance values of a single monster, one slot per [`Resist`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resists {
    values: [i32; Resist::COUNT],
}

impl Resists {
    /// Resistance at or above which a monster takes no damage from an element.
    pub const IMMUNITY_THRESHOLD: i32 = 100;

    pub const fn none() -> Self {
        Self {
            values: [0; Resist::COUNT],
        }
    }

    /// Sets a resistance value (builder pattern).
    #[must_use]
    pub const fn with(mut self, resist: Resist, value: i32) -> Self {
        self.values[resist.index()] = value;
        self
    }

    /// Marks the monster as immune to `resist` (builder pattern).
    #[must_use]
    pub const fn immune_to(self, resist: Resist) -> Self {
        self.with(resist, Self::IMMUNITY_THRESHOLD)
    }

    pub const fn get(&self, resist: Resist) -> i32 {
        self.values[resist.index()]
    }

    pub const fn is_immune(&self, resist: Resist) -> bool {
        self.get(resist) >= Self::IMMUNITY_THRESHOLD
    }

    /// Returns true if the monster is immune to any of the given elements.
    pub fn is_immune_to_any(&self, resists: &[Resist]) -> bool {
        resists.iter().any(|r| self.is_immune(*r))
    }
}
