//! Key-binding requirements and audit.

use game_core::{KeyBindings, SkillId};

/// One entry of a character's required key bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// The skill itself must be bound.
    Skill(SkillId),

    /// Any one skill of `family` satisfies the requirement. When none is
    /// bound, `reported` is listed as missing.
    AnyOf {
        reported: SkillId,
        family: Vec<SkillId>,
    },
}

impl Requirement {
    pub fn is_satisfied(&self, bindings: &KeyBindings) -> bool {
        match self {
            Requirement::Skill(skill) => bindings.is_bound(*skill),
            Requirement::AnyOf { family, .. } => family.iter().any(|s| bindings.is_bound(*s)),
        }
    }

    /// Skill listed when the requirement is not met.
    pub fn reported(&self) -> SkillId {
        match self {
            Requirement::Skill(skill) => *skill,
            Requirement::AnyOf { reported, .. } => *reported,
        }
    }
}

impl From<SkillId> for Requirement {
    fn from(skill: SkillId) -> Self {
        Requirement::Skill(skill)
    }
}

/// Returns the unmet requirements, in requirement order.
pub fn audit_key_bindings(bindings: &KeyBindings, requirements: &[Requirement]) -> Vec<SkillId> {
    requirements
        .iter()
        .filter(|r| !r.is_satisfied(bindings))
        .map(Requirement::reported)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Key;

    fn armor_family() -> Requirement {
        Requirement::AnyOf {
            reported: SkillId::ShiverArmor,
            family: vec![SkillId::FrozenArmor, SkillId::ChillingArmor, SkillId::ShiverArmor],
        }
    }

    #[test]
    fn any_armor_satisfies_the_family() {
        let bindings = KeyBindings::new()
            .with(SkillId::Blizzard, Key::function(1))
            .with(SkillId::ChillingArmor, Key::function(2));
        let required = [
            Requirement::Skill(SkillId::Blizzard),
            Requirement::Skill(SkillId::StaticField),
            armor_family(),
        ];

        assert_eq!(
            audit_key_bindings(&bindings, &required),
            vec![SkillId::StaticField]
        );
    }

    #[test]
    fn missing_family_is_reported_once() {
        let required = [
            armor_family(),
            SkillId::Teleport.into(),
        ];

        assert_eq!(
            audit_key_bindings(&KeyBindings::new(), &required),
            vec![SkillId::ShiverArmor, SkillId::Teleport]
        );
    }
}
