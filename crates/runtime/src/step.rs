//! Step vocabulary handed to the step execution layer.
//!
//! Steps are higher-level game commands. The runtime only describes them;
//! executing a step (walking into range, pressing the bound key, clicking the
//! target, waiting for the cast to finish) belongs to the
//! [`StepExecutor`](crate::api::StepExecutor) supplied by the caller.

use std::fmt;
use std::time::Duration;

use game_core::{SkillId, UnitId};

/// Range the executor should keep from the target while attacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Distance {
    pub min: u32,
    pub max: u32,
}

impl Distance {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub const fn contains(&self, distance: u32) -> bool {
        distance >= self.min && distance <= self.max
    }

    /// Returns true if `self` lies entirely inside `outer`.
    #[inline]
    pub const fn within(&self, outer: Distance) -> bool {
        self.min >= outer.min && self.max <= outer.max
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// An atomic game command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Basic attack with the weapon (left skill).
    PrimaryAttack {
        target: UnitId,
        repeat: u32,
        /// Whether the executor may cut the attack short when the target
        /// dies or moves out of range.
        interruptible: bool,
        distance: Option<Distance>,
    },

    /// Cast of a bound skill on a target.
    SecondaryAttack {
        skill: SkillId,
        target: UnitId,
        repeat: u32,
        distance: Option<Distance>,
    },

    /// Do nothing for the given duration.
    Wait(Duration),
}

impl Step {
    pub fn primary_attack(
        target: UnitId,
        repeat: u32,
        interruptible: bool,
        distance: Option<Distance>,
    ) -> Self {
        Step::PrimaryAttack {
            target,
            repeat,
            interruptible,
            distance,
        }
    }

    pub fn secondary_attack(
        skill: SkillId,
        target: UnitId,
        repeat: u32,
        distance: Option<Distance>,
    ) -> Self {
        Step::SecondaryAttack {
            skill,
            target,
            repeat,
            distance,
        }
    }

    pub fn wait(duration: Duration) -> Self {
        Step::Wait(duration)
    }

    /// Unit targeted by an attack step.
    pub fn target(&self) -> Option<UnitId> {
        match self {
            Step::PrimaryAttack { target, .. } | Step::SecondaryAttack { target, .. } => {
                Some(*target)
            }
            Step::Wait(_) => None,
        }
    }

    /// Range option of an attack step.
    pub fn distance(&self) -> Option<Distance> {
        match self {
            Step::PrimaryAttack { distance, .. } | Step::SecondaryAttack { distance, .. } => {
                *distance
            }
            Step::Wait(_) => None,
        }
    }

    /// Skill cast by a secondary attack.
    pub fn skill(&self) -> Option<SkillId> {
        match self {
            Step::SecondaryAttack { skill, .. } => Some(*skill),
            _ => None,
        }
    }

    pub fn is_attack(&self) -> bool {
        !matches!(self, Step::Wait(_))
    }
}
