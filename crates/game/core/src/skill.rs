/// Skill identifiers the controllers reason about.
///
/// Only the skills referenced by key-binding audits, buffs and attack
/// rotations are listed; the game exposes many more.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillId {
    // ========================================================================
    // Sorceress: cold
    // ========================================================================
    Blizzard,
    FrozenArmor,
    ShiverArmor,
    ChillingArmor,

    // ========================================================================
    // Sorceress: lightning
    // ========================================================================
    StaticField,
    Teleport,

    // ========================================================================
    // Sorceress: fire
    // ========================================================================
    EnergyShield,

    // ========================================================================
    // Shared
    // ========================================================================
    TomeOfTownPortal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn skills_parse_from_snake_case() {
        assert_eq!(SkillId::iter().count(), 8);
        assert_eq!("static_field".parse(), Ok(SkillId::StaticField));
        assert_eq!(SkillId::TomeOfTownPortal.to_string(), "tome_of_town_portal");
        assert!("battle_orders".parse::<SkillId>().is_err());
    }
}
