/// Monster class identifiers.
///
/// Several distinct classes share one in-game name (the three High Council
/// variants, for instance), which is why controllers match on `NpcId` rather
/// than on display names.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NpcId {
    // Act 1
    Zombie,
    FallenShaman,
    DarkStalker,
    Andariel,
    // Act 2
    Summoner,
    Duriel,
    // Act 3
    CouncilMember,
    CouncilMember2,
    CouncilMember3,
    Mephisto,
    // Act 4
    Izual,
    Diablo,
    // Act 5
    DefiledWarrior,
    Nihlathak,
    BaalCrab,
}

impl NpcId {
    /// Returns true for any of the High Council classes.
    pub const fn is_council_member(self) -> bool {
        matches!(
            self,
            NpcId::CouncilMember | NpcId::CouncilMember2 | NpcId::CouncilMember3
        )
    }
}
