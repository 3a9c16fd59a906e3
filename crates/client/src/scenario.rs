//! Scenario files for the simulator.
//!
//! A scenario describes the starting world (player, monsters and when they
//! show up, key bindings) and which kill sequence to run against it. It is
//! stored as JSON:
//!
//! ```json
//! {
//!   "name": "chaos sanctuary",
//!   "player": { "position": { "x": 0, "y": 0 } },
//!   "key_bindings": { "blizzard": { "primary": 113 } },
//!   "monsters": [
//!     { "id": 1, "name": "diablo", "position": { "x": 20, "y": 0 },
//!       "life": 600, "appears_after_ms": 4000 }
//!   ],
//!   "sequence": "diablo"
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use game_core::{KeyBindings, Monster, MonsterType, NpcId, PlayerUnit, Position, Resist, Resists, UnitId};
use runtime::{BotAction, Character};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unit id {0} is used by more than one monster")]
    DuplicateUnit(UnitId),
}

/// Kill sequence a scenario exercises.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KillSequence {
    Countess,
    Andariel,
    Summoner,
    Duriel,
    Council,
    Mephisto,
    Izual,
    Diablo,
    Pindle {
        #[serde(default)]
        skip_on_immunities: Vec<Resist>,
    },
    Nihlathak,
    Baal,
}

impl KillSequence {
    /// Builds the action for `character`.
    pub fn build(&self, character: &dyn Character) -> BotAction {
        match self {
            KillSequence::Countess => character.kill_countess(),
            KillSequence::Andariel => character.kill_andariel(),
            KillSequence::Summoner => character.kill_summoner(),
            KillSequence::Duriel => character.kill_duriel(),
            KillSequence::Council => character.kill_council(),
            KillSequence::Mephisto => character.kill_mephisto(),
            KillSequence::Izual => character.kill_izual(),
            KillSequence::Diablo => character.kill_diablo(),
            KillSequence::Pindle { skip_on_immunities } => {
                character.kill_pindle(skip_on_immunities.clone())
            }
            KillSequence::Nihlathak => character.kill_nihlathak(),
            KillSequence::Baal => character.kill_baal(),
        }
    }
}

/// Monster entry of a scenario.
#[derive(Clone, Debug, Deserialize)]
pub struct ScenarioMonster {
    pub id: u32,
    pub name: NpcId,
    #[serde(default)]
    pub kind: MonsterType,
    pub position: Position,
    pub life: i32,
    #[serde(default)]
    pub immune_to: Vec<Resist>,
    #[serde(default = "hostile")]
    pub hostile: bool,
    /// Simulated time before the monster enters the snapshot.
    #[serde(default)]
    pub appears_after_ms: u64,
}

fn hostile() -> bool {
    true
}

impl ScenarioMonster {
    pub fn appears_after(&self) -> Duration {
        Duration::from_millis(self.appears_after_ms)
    }

    pub fn to_monster(&self) -> Monster {
        let resists = self
            .immune_to
            .iter()
            .fold(Resists::none(), |resists, resist| resists.immune_to(*resist));
        let monster = Monster::new(UnitId(self.id), self.name, self.position, self.life)
            .with_kind(self.kind)
            .with_resists(resists);
        if self.hostile { monster } else { monster.friendly() }
    }
}

/// Flat damage applied by the simulated world per cast or swing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DamageModel {
    pub blizzard: i32,
    pub primary: i32,
    /// Share of current life removed by one Static Field cast, in percent.
    pub static_field_percent: i32,
}

impl Default for DamageModel {
    fn default() -> Self {
        Self {
            blizzard: 40,
            primary: 10,
            static_field_percent: 25,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub player: PlayerUnit,
    #[serde(default)]
    pub key_bindings: KeyBindings,
    #[serde(default)]
    pub monsters: Vec<ScenarioMonster>,
    pub sequence: KillSequence,
    #[serde(default)]
    pub damage: DamageModel,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<(), ScenarioError> {
        let mut seen = HashSet::new();
        for monster in &self.monsters {
            if !seen.insert(monster.id) {
                return Err(ScenarioError::DuplicateUnit(UnitId(monster.id)));
            }
        }
        Ok(())
    }
}
