//! Read-only world snapshot model shared by the bot runtime and its tools.
//!
//! `game-core` describes what the agent can observe at one point in time:
//! the player unit and its status flags, the live monsters around it, and the
//! key bindings configured for each skill. Every decision made by the runtime
//! is a pure function of one [`GameData`] value, so nothing in this crate
//! mutates the world or talks to the game process.
pub mod data;
pub mod keybinding;
pub mod monster;
pub mod npc;
pub mod player;
pub mod position;
pub mod resist;
pub mod skill;

pub use data::GameData;
pub use keybinding::{Key, KeyBinding, KeyBindings};
pub use monster::{Monster, MonsterType, Monsters, UnitId};
pub use npc::NpcId;
pub use player::{PlayerStates, PlayerUnit};
pub use position::Position;
pub use resist::{Resist, Resists};
pub use skill::SkillId;
