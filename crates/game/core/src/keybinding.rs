//! Skill to key mapping as configured in the game client.

use std::collections::BTreeMap;
use std::fmt;

use crate::skill::SkillId;

/// A keyboard key, identified by its virtual key code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key(pub u16);

impl Key {
    /// Function keys F1..F12 map to virtual codes 0x70..0x7B.
    pub const fn function(n: u16) -> Self {
        Self(0x6F + n)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            code @ 0x70..=0x7B => write!(f, "F{}", code - 0x6F),
            code => write!(f, "0x{code:02X}"),
        }
    }
}

/// Keys bound to one skill. The game allows a primary and a secondary key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyBinding {
    pub primary: Key,
    #[cfg_attr(feature = "serde", serde(default))]
    pub secondary: Option<Key>,
}

impl KeyBinding {
    pub const fn new(primary: Key) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }
}

/// Input-binding table of the current character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KeyBindings {
    skills: BTreeMap<SkillId, KeyBinding>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `skill` to `key` (builder pattern).
    #[must_use]
    pub fn with(mut self, skill: SkillId, key: Key) -> Self {
        self.bind(skill, key);
        self
    }

    pub fn bind(&mut self, skill: SkillId, key: Key) {
        self.skills.insert(skill, KeyBinding::new(key));
    }

    pub fn key_binding_for_skill(&self, skill: SkillId) -> Option<KeyBinding> {
        self.skills.get(&skill).copied()
    }

    pub fn is_bound(&self, skill: SkillId) -> bool {
        self.skills.contains_key(&skill)
    }
}
