//! Monsters visible in a snapshot.

use std::fmt;

use crate::npc::NpcId;
use crate::position::Position;
use crate::resist::{Resist, Resists};

/// Identity of one spawned unit.
///
/// Unit ids are assigned by the game when a unit spawns and stay stable for
/// its lifetime; a respawned boss gets a fresh id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rarity classification of a monster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MonsterType {
    /// Regular monster, also used for act bosses.
    #[default]
    None,
    Minion,
    Champion,
    Unique,
    SuperUnique,
}

/// A single monster unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub unit_id: UnitId,
    pub name: NpcId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: MonsterType,
    pub position: Position,
    pub life: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resists: Resists,
    /// Pets, mercenaries and town NPCs are listed but never attacked.
    #[cfg_attr(feature = "serde", serde(default = "default_hostile"))]
    pub hostile: bool,
}

#[cfg(feature = "serde")]
fn default_hostile() -> bool {
    true
}

impl Monster {
    /// Creates a hostile, resistance-free monster with the given life.
    pub fn new(unit_id: UnitId, name: NpcId, position: Position, life: i32) -> Self {
        Self {
            unit_id,
            name,
            kind: MonsterType::None,
            position,
            life,
            resists: Resists::none(),
            hostile: true,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: MonsterType) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_resists(mut self, resists: Resists) -> Self {
        self.resists = resists;
        self
    }

    #[must_use]
    pub fn friendly(mut self) -> Self {
        self.hostile = false;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    #[inline]
    pub fn is_immune(&self, resist: Resist) -> bool {
        self.resists.is_immune(resist)
    }
}

/// All monsters reported by one snapshot, dead ones included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Monsters(Vec<Monster>);

impl Monsters {
    pub fn new(monsters: Vec<Monster>) -> Self {
        Self(monsters)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Monster> {
        self.0.iter()
    }

    /// Live hostile monsters, in snapshot order.
    pub fn enemies(&self) -> impl Iterator<Item = &Monster> {
        self.0.iter().filter(|m| m.hostile && m.is_alive())
    }

    /// Finds the first monster of class `name` and rarity `kind`.
    ///
    /// Dead monsters are still returned; callers that care check
    /// [`Monster::is_alive`].
    pub fn find_one(&self, name: NpcId, kind: MonsterType) -> Option<&Monster> {
        self.0.iter().find(|m| m.name == name && m.kind == kind)
    }

    pub fn find_by_id(&self, id: UnitId) -> Option<&Monster> {
        self.0.iter().find(|m| m.unit_id == id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Monster> for Monsters {
    fn from_iter<I: IntoIterator<Item = Monster>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zombie(id: u32, life: i32) -> Monster {
        Monster::new(UnitId(id), NpcId::Zombie, Position::new(0, 0), life)
    }

    #[test]
    fn enemies_skip_dead_and_friendly_units() {
        let monsters = Monsters::new(vec![
            zombie(1, 10),
            zombie(2, 0),
            zombie(3, 10).friendly(),
            zombie(4, 5),
        ]);

        let ids: Vec<_> = monsters.enemies().map(|m| m.unit_id).collect();
        assert_eq!(ids, vec![UnitId(1), UnitId(4)]);
    }

    #[test]
    fn find_one_matches_name_and_kind() {
        let countess = Monster::new(UnitId(7), NpcId::DarkStalker, Position::new(1, 1), 100)
            .with_kind(MonsterType::SuperUnique);
        let stalker = Monster::new(UnitId(8), NpcId::DarkStalker, Position::new(2, 2), 100);
        let monsters = Monsters::new(vec![stalker, countess]);

        let found = monsters
            .find_one(NpcId::DarkStalker, MonsterType::SuperUnique)
            .map(|m| m.unit_id);
        assert_eq!(found, Some(UnitId(7)));
        assert!(monsters.find_one(NpcId::Andariel, MonsterType::None).is_none());
    }
}
