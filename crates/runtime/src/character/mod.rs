//! Per-archetype combat controllers.
//!
//! Every character archetype implements [`Character`]: a key-binding audit,
//! the buffs it wants applied, and a catalog of kill sequences built on
//! [`Character::kill_monster_sequence`]. Kill sequences are [`BotAction`]s
//! whose generators own the small amount of progress state (attack counters,
//! previous target, cast timestamps) the decision logic needs across ticks.
//!
//! - [`BaseCharacter`]: shared collaborators and pre-battle validation
//! - [`bindings`]: key-binding requirements and the audit function
//! - [`BlizzardSorceress`]: cold sorceress controller

pub mod bindings;
pub mod blizzard_sorceress;

use std::sync::Arc;

use game_core::{GameData, MonsterType, NpcId, Resist, SkillId, UnitId};

use crate::api::{Pather, Result, RuntimeError};
use crate::clock::Clock;
use crate::runtime::BotAction;
use crate::step::Distance;

pub use bindings::{Requirement, audit_key_bindings};
pub use blizzard_sorceress::BlizzardSorceress;

/// Picks the unit to attack in a snapshot, or `None` when nothing is left.
pub type MonsterSelector = Box<dyn FnMut(&GameData) -> Option<UnitId> + Send>;

/// Controller contract shared by every character archetype.
pub trait Character: Send + Sync {
    /// Required skills that have no key bound.
    fn check_key_bindings(&self, data: &GameData) -> Vec<SkillId>;

    /// Buffs to cast, derived from what is bound.
    fn buff_skills(&self, data: &GameData) -> Vec<SkillId>;

    /// Buffs to cast before Battle Command / Battle Orders.
    fn pre_cta_buff_skills(&self, data: &GameData) -> Vec<SkillId>;

    /// Attacks whatever `selector` picks until it picks nothing.
    ///
    /// Targets immune to any element in `skip_on_immunities` are not
    /// engaged. `distance` overrides the archetype's default range.
    fn kill_monster_sequence(
        &self,
        selector: MonsterSelector,
        skip_on_immunities: Vec<Resist>,
        distance: Option<Distance>,
    ) -> BotAction;

    /// Kills the first live monster of class `npc` and rarity `kind`,
    /// keeping between the default minimum range and `max_distance`.
    fn kill_monster_by_name(
        &self,
        npc: NpcId,
        kind: MonsterType,
        max_distance: u32,
        skip_on_immunities: Vec<Resist>,
    ) -> BotAction;

    fn kill_countess(&self) -> BotAction;
    fn kill_andariel(&self) -> BotAction;
    fn kill_summoner(&self) -> BotAction;
    fn kill_duriel(&self) -> BotAction;
    fn kill_council(&self) -> BotAction;
    fn kill_mephisto(&self) -> BotAction;
    fn kill_izual(&self) -> BotAction;
    fn kill_diablo(&self) -> BotAction;
    fn kill_pindle(&self, skip_on_immunities: Vec<Resist>) -> BotAction;
    fn kill_nihlathak(&self) -> BotAction;
    fn kill_baal(&self) -> BotAction;
}

/// Turns a non-empty key-binding audit into an error.
///
/// The audit itself never fails; callers that want to refuse to play with
/// missing bindings use this instead of inspecting the list.
pub fn ensure_key_bindings(character: &dyn Character, data: &GameData) -> Result<()> {
    let missing = character.check_key_bindings(data);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(RuntimeError::MissingKeyBindings(missing))
    }
}

/// Collaborators and checks shared by all archetypes.
#[derive(Clone)]
pub struct BaseCharacter {
    pub pather: Arc<dyn Pather>,
    pub clock: Arc<dyn Clock>,
}

impl BaseCharacter {
    pub fn new(pather: Arc<dyn Pather>, clock: Arc<dyn Clock>) -> Self {
        Self { pather, clock }
    }

    /// Validates a target before engaging it.
    ///
    /// The target must be present and alive in the snapshot, and must not be
    /// immune to any element in `skip_on_immunities`.
    pub fn pre_battle_checks(
        &self,
        data: &GameData,
        id: UnitId,
        skip_on_immunities: &[Resist],
    ) -> bool {
        let Some(monster) = data.monsters.find_by_id(id) else {
            tracing::debug!(unit = %id, "target not present in snapshot");
            return false;
        };
        if !monster.is_alive() {
            return false;
        }
        if monster.resists.is_immune_to_any(skip_on_immunities) {
            tracing::info!(
                unit = %id,
                monster = %monster.name,
                "skipping monster immune to configured elements"
            );
            return false;
        }
        true
    }
}
