//! Cold sorceress built around Blizzard.
//!
//! Every kill sequence funnels into [`KillLoop`], a per-action record of
//! attack progress that decides one step per tick:
//!
//! 1. No target selected: done
//! 2. Target changed: reset the per-target attack budget
//! 3. Target fails pre-battle checks: stalled
//! 4. Attack budget spent: gave up
//! 5. Cooldown elapsed, no skill cooldown and an enemy hugging the player:
//!    Blizzard on that enemy instead of the target
//! 6. Otherwise attack the target, from close range once the target has
//!    soaked up too many attacks

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use action_chain::{Action, Yield, builder};
use game_core::{GameData, MonsterType, NpcId, Resist, SkillId, UnitId};

use super::bindings::{Requirement, audit_key_bindings};
use super::{BaseCharacter, Character, MonsterSelector};
use crate::api::Pather;
use crate::clock::Clock;
use crate::config::SorceressConfig;
use crate::runtime::BotAction;
use crate::step::{Distance, Step};

/// Armor skills in buff preference order.
const ARMORS: [SkillId; 3] = [SkillId::ChillingArmor, SkillId::ShiverArmor, SkillId::FrozenArmor];

/// Static Field casts and range used to open the Diablo fight.
const DIABLO_STATIC_CASTS: u32 = 5;
const DIABLO_STATIC_RANGE: Distance = Distance::new(3, 8);

/// Range of the Static Field opener of multi-phase fights.
const PHASE_STATIC_RANGE: Distance = Distance::new(5, 8);

/// Times Diablo is engaged before the hunt is abandoned.
const MAX_DIABLO_ENGAGEMENTS: u32 = 3;

fn required_key_bindings() -> [Requirement; 5] {
    [
        Requirement::Skill(SkillId::Blizzard),
        Requirement::Skill(SkillId::Teleport),
        Requirement::Skill(SkillId::TomeOfTownPortal),
        Requirement::AnyOf {
            reported: SkillId::ShiverArmor,
            family: vec![SkillId::FrozenArmor, SkillId::ChillingArmor, SkillId::ShiverArmor],
        },
        Requirement::Skill(SkillId::StaticField),
    ]
}

/// Blizzard Sorceress controller.
#[derive(Clone)]
pub struct BlizzardSorceress {
    base: BaseCharacter,
    config: SorceressConfig,
}

impl BlizzardSorceress {
    pub fn new(base: BaseCharacter, config: SorceressConfig) -> Self {
        Self { base, config }
    }

    /// Creates a controller from its collaborators with default tuning.
    pub fn with_defaults(pather: Arc<dyn Pather>, clock: Arc<dyn Clock>) -> Self {
        Self::new(BaseCharacter::new(pather, clock), SorceressConfig::default())
    }

    pub fn config(&self) -> &SorceressConfig {
        &self.config
    }

    /// Static Field opener followed by a fixed number of kill actions.
    ///
    /// For bosses that come back several times. When the boss is absent the
    /// opener casts nothing and the kill actions complete immediately.
    pub fn kill_repeatedly(&self, npc: NpcId, static_casts: u32) -> BotAction {
        let opener = Action::steps(format!("static field on {npc}"), move |data: &GameData| {
            match find_alive(data, npc, MonsterType::None) {
                Some(id) => Yield::one(Step::secondary_attack(
                    SkillId::StaticField,
                    id,
                    static_casts,
                    Some(PHASE_STATIC_RANGE),
                )),
                None => {
                    tracing::debug!(monster = %npc, "no boss to debuff");
                    Yield::done()
                }
            }
        });

        let mut actions = vec![opener];
        actions.extend(
            (0..self.config.repeated_phase_kills).map(|_| self.kill_monster(npc, MonsterType::None)),
        );
        builder::sequence(format!("kill {npc} repeatedly"), actions)
    }

    fn kill_monster(&self, npc: NpcId, kind: MonsterType) -> BotAction {
        self.named_sequence(
            format!("kill {npc}"),
            Box::new(move |data: &GameData| find_alive(data, npc, kind)),
            Vec::new(),
            None,
        )
    }

    fn named_sequence(
        &self,
        name: impl Into<Cow<'static, str>>,
        selector: MonsterSelector,
        skip_on_immunities: Vec<Resist>,
        distance: Option<Distance>,
    ) -> BotAction {
        let mut kill = KillLoop::new(self, selector, skip_on_immunities, distance);
        builder::repeat_steps(name, move |data: &GameData| kill.tick(data))
    }
}

impl Character for BlizzardSorceress {
    fn check_key_bindings(&self, data: &GameData) -> Vec<SkillId> {
        let missing = audit_key_bindings(&data.key_bindings, &required_key_bindings());
        if !missing.is_empty() {
            tracing::debug!(?missing, "missing required key bindings");
        }
        missing
    }

    fn buff_skills(&self, data: &GameData) -> Vec<SkillId> {
        let bindings = &data.key_bindings;
        let mut skills = Vec::with_capacity(2);
        if bindings.is_bound(SkillId::EnergyShield) {
            skills.push(SkillId::EnergyShield);
        }
        if let Some(armor) = ARMORS.into_iter().find(|armor| bindings.is_bound(*armor)) {
            skills.push(armor);
        }
        skills
    }

    fn pre_cta_buff_skills(&self, _data: &GameData) -> Vec<SkillId> {
        Vec::new()
    }

    fn kill_monster_sequence(
        &self,
        selector: MonsterSelector,
        skip_on_immunities: Vec<Resist>,
        distance: Option<Distance>,
    ) -> BotAction {
        self.named_sequence("kill monster sequence", selector, skip_on_immunities, distance)
    }

    fn kill_monster_by_name(
        &self,
        npc: NpcId,
        kind: MonsterType,
        max_distance: u32,
        skip_on_immunities: Vec<Resist>,
    ) -> BotAction {
        self.named_sequence(
            format!("kill {npc}"),
            Box::new(move |data: &GameData| find_alive(data, npc, kind)),
            skip_on_immunities,
            Some(Distance::new(self.config.attack_distance.min, max_distance)),
        )
    }

    fn kill_countess(&self) -> BotAction {
        self.kill_boss(NpcId::DarkStalker, MonsterType::SuperUnique, Vec::new())
    }

    fn kill_andariel(&self) -> BotAction {
        self.kill_boss(NpcId::Andariel, MonsterType::None, Vec::new())
    }

    fn kill_summoner(&self) -> BotAction {
        self.kill_boss(NpcId::Summoner, MonsterType::None, Vec::new())
    }

    fn kill_duriel(&self) -> BotAction {
        self.kill_boss(NpcId::Duriel, MonsterType::None, Vec::new())
    }

    fn kill_council(&self) -> BotAction {
        let distance = Distance::new(self.config.council_min_distance, self.config.attack_distance.max);
        self.named_sequence(
            "kill council",
            Box::new(select_council_member),
            Vec::new(),
            Some(distance),
        )
    }

    fn kill_mephisto(&self) -> BotAction {
        self.kill_boss(NpcId::Mephisto, MonsterType::None, Vec::new())
    }

    fn kill_izual(&self) -> BotAction {
        self.kill_repeatedly(NpcId::Izual, 7)
    }

    fn kill_diablo(&self) -> BotAction {
        let mut hunt = DiabloHunt::new(self.clone());
        builder::repeat_chain("kill diablo", move |data: &GameData| hunt.tick(data))
    }

    fn kill_pindle(&self, skip_on_immunities: Vec<Resist>) -> BotAction {
        self.kill_boss(NpcId::DefiledWarrior, MonsterType::SuperUnique, skip_on_immunities)
    }

    fn kill_nihlathak(&self) -> BotAction {
        self.kill_boss(NpcId::Nihlathak, MonsterType::SuperUnique, Vec::new())
    }

    fn kill_baal(&self) -> BotAction {
        self.kill_repeatedly(NpcId::BaalCrab, 5)
    }
}

impl BlizzardSorceress {
    fn kill_boss(&self, npc: NpcId, kind: MonsterType, skip_on_immunities: Vec<Resist>) -> BotAction {
        self.kill_monster_by_name(npc, kind, self.config.attack_distance.max, skip_on_immunities)
    }
}

fn find_alive(data: &GameData, npc: NpcId, kind: MonsterType) -> Option<UnitId> {
    data.monsters
        .find_one(npc, kind)
        .filter(|m| m.is_alive())
        .map(|m| m.unit_id)
}

/// Picks a council member, preferring those that are not cold immune.
fn select_council_member(data: &GameData) -> Option<UnitId> {
    let (vulnerable, immune): (Vec<_>, Vec<_>) = data
        .monsters
        .enemies()
        .filter(|m| m.name.is_council_member())
        .partition(|m| !m.is_immune(Resist::Cold));

    vulnerable.into_iter().chain(immune).next().map(|m| m.unit_id)
}

/// Progress of one kill sequence.
struct KillLoop {
    base: BaseCharacter,
    config: SorceressConfig,
    selector: MonsterSelector,
    skip_on_immunities: Vec<Resist>,
    distance: Distance,
    completed_attack_loops: u32,
    previous_unit: Option<UnitId>,
    previous_area_cast: Option<Duration>,
}

impl KillLoop {
    fn new(
        sorceress: &BlizzardSorceress,
        selector: MonsterSelector,
        skip_on_immunities: Vec<Resist>,
        distance: Option<Distance>,
    ) -> Self {
        Self {
            base: sorceress.base.clone(),
            config: sorceress.config.clone(),
            selector,
            skip_on_immunities,
            distance: distance.unwrap_or(sorceress.config.attack_distance),
            completed_attack_loops: 0,
            previous_unit: None,
            previous_area_cast: None,
        }
    }

    fn tick(&mut self, data: &GameData) -> Yield<Step> {
        let Some(id) = (self.selector)(data) else {
            return Yield::done();
        };

        if self.previous_unit != Some(id) {
            self.completed_attack_loops = 0;
        }

        if !self.base.pre_battle_checks(data, id, &self.skip_on_immunities) {
            return Yield::stalled();
        }

        if self.completed_attack_loops >= self.config.max_attack_loops {
            tracing::warn!(
                unit = %id,
                loops = self.completed_attack_loops,
                "attack budget spent, giving up on target"
            );
            return Yield::gave_up();
        }

        let distance = self.effective_distance();

        if let Some(nearby) = self.area_cast_target(data) {
            tracing::debug!(unit = %nearby, "casting Blizzard on nearby monster");
            self.previous_area_cast = Some(self.base.clock.now());
            return Yield::one(Step::secondary_attack(
                SkillId::Blizzard,
                nearby,
                1,
                Some(distance),
            ));
        }

        if self.completed_attack_loops.checked_sub(1) == Some(self.config.degrade_after_loops) {
            tracing::debug!(unit = %id, %distance, "reducing attack distance, target looks unreachable");
        }

        self.completed_attack_loops += 1;
        self.previous_unit = Some(id);

        if data.player_unit.on_cooldown() {
            Yield::one(Step::primary_attack(id, 2, true, Some(distance)))
        } else {
            Yield::one(Step::secondary_attack(SkillId::Blizzard, id, 1, Some(distance)))
        }
    }

    /// Range for this tick, derived from the current target's attack count.
    fn effective_distance(&self) -> Distance {
        if self.completed_attack_loops > self.config.degrade_after_loops {
            self.config.close_distance
        } else {
            self.distance
        }
    }

    fn area_cast_target(&self, data: &GameData) -> Option<UnitId> {
        if data.player_unit.on_cooldown() {
            return None;
        }
        let cooldown = self.config.area_cast_cooldown;
        let ready = self
            .previous_area_cast
            .is_none_or(|at| self.base.clock.since(at) > cooldown);
        if !ready {
            return None;
        }

        data.monsters
            .enemies()
            .find(|m| self.base.pather.distance_from_me(data, m.position) < self.config.area_clear_radius)
            .map(|m| m.unit_id)
    }
}

/// Progress of the Diablo hunt.
struct DiabloHunt {
    sorceress: BlizzardSorceress,
    started: Option<Duration>,
    engagements: u32,
}

impl DiabloHunt {
    fn new(sorceress: BlizzardSorceress) -> Self {
        Self {
            sorceress,
            started: None,
            engagements: 0,
        }
    }

    fn tick(&mut self, data: &GameData) -> Yield<BotAction> {
        let clock = &self.sorceress.base.clock;
        let started = *self.started.get_or_insert_with(|| clock.now());

        let Some(id) = find_alive(data, NpcId::Diablo, MonsterType::None) else {
            if self.engagements > 0 {
                return Yield::done();
            }
            if clock.since(started) > self.sorceress.config.boss_search_timeout {
                tracing::error!("Diablo not found, timeout reached");
                return Yield::gave_up();
            }
            return Yield::one(builder::single_step(
                "wait for diablo",
                Step::wait(self.sorceress.config.boss_poll_interval),
            ));
        };

        if self.engagements >= MAX_DIABLO_ENGAGEMENTS {
            tracing::warn!(unit = %id, engagements = self.engagements, "Diablo still standing, giving up");
            return Yield::gave_up();
        }
        self.engagements += 1;
        tracing::info!(unit = %id, "Diablo detected, attacking");

        Yield::Work(vec![
            builder::single_step(
                "static field on diablo",
                Step::secondary_attack(
                    SkillId::StaticField,
                    id,
                    DIABLO_STATIC_CASTS,
                    Some(DIABLO_STATIC_RANGE),
                ),
            ),
            self.sorceress.kill_monster(NpcId::Diablo, MonsterType::None),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::ensure_key_bindings;
    use crate::clock::ManualClock;
    use crate::pather::StraightLinePather;
    use game_core::{Key, KeyBindings, Monster, Monsters, PlayerStates, PlayerUnit, Position, Resists};

    fn sorceress(clock: Arc<ManualClock>) -> BlizzardSorceress {
        BlizzardSorceress::with_defaults(Arc::new(StraightLinePather), clock)
    }

    fn zombie(id: u32, x: i32) -> Monster {
        Monster::new(UnitId(id), NpcId::Zombie, Position::new(x, 0), 100)
    }

    fn world(monsters: Vec<Monster>) -> GameData {
        GameData::new(
            PlayerUnit::new(Position::ORIGIN),
            Monsters::new(monsters),
            KeyBindings::new(),
        )
    }

    fn first_enemy() -> MonsterSelector {
        Box::new(|data: &GameData| data.monsters.enemies().next().map(|m| m.unit_id))
    }

    fn kill_loop(clock: Arc<ManualClock>) -> KillLoop {
        KillLoop::new(&sorceress(clock), first_enemy(), Vec::new(), None)
    }

    fn single(result: Yield<Step>) -> Step {
        match result {
            Yield::Work(mut steps) if steps.len() == 1 => steps.remove(0),
            other => panic!("expected a single step, got {other:?}"),
        }
    }

    #[test]
    fn switching_target_resets_attack_budget() {
        let mut kill = kill_loop(Arc::new(ManualClock::new()));
        let a = world(vec![zombie(1, 20)]);
        let b = world(vec![zombie(2, 20)]);

        for _ in 0..5 {
            single(kill.tick(&a));
        }
        assert_eq!(kill.completed_attack_loops, 5);

        let step = single(kill.tick(&b));
        assert_eq!(step.target(), Some(UnitId(2)));
        assert_eq!(kill.completed_attack_loops, 1);
        assert_eq!(kill.previous_unit, Some(UnitId(2)));
    }

    #[test]
    fn distance_degrades_after_twelve_loops() {
        let mut kill = kill_loop(Arc::new(ManualClock::new()));
        let data = world(vec![zombie(1, 100)]);
        let default = Distance::new(25, 30);
        let close = Distance::new(1, 5);

        for tick in 0..30u32 {
            let distance = single(kill.tick(&data)).distance().expect("attack carries a range");
            if tick > 12 {
                assert!(distance.within(close), "tick {tick}: {distance}");
            } else {
                assert!(distance.within(default), "tick {tick}: {distance}");
            }
        }
    }

    #[test]
    fn unbounded_degrade_threshold_keeps_default_band() {
        let clock = Arc::new(ManualClock::new());
        let config = SorceressConfig {
            degrade_after_loops: u32::MAX,
            ..SorceressConfig::default()
        };
        let sorc = BlizzardSorceress::new(
            BaseCharacter::new(Arc::new(StraightLinePather), clock),
            config,
        );
        let mut kill = KillLoop::new(&sorc, first_enemy(), Vec::new(), None);
        let data = world(vec![zombie(1, 100)]);

        for _ in 0..20 {
            let step = single(kill.tick(&data));
            assert_eq!(step.distance(), Some(Distance::new(25, 30)));
        }
    }

    #[test]
    fn new_target_gets_default_band_back() {
        let mut kill = kill_loop(Arc::new(ManualClock::new()));
        let a = world(vec![zombie(1, 100)]);
        let b = world(vec![zombie(2, 100)]);

        for _ in 0..20 {
            single(kill.tick(&a));
        }
        let step = single(kill.tick(&b));
        assert_eq!(step.distance(), Some(Distance::new(25, 30)));
    }

    #[test]
    fn attack_budget_caps_iterations() {
        let mut kill = kill_loop(Arc::new(ManualClock::new()));
        let data = world(vec![zombie(1, 100)]);

        for _ in 0..40 {
            single(kill.tick(&data));
        }
        assert_eq!(kill.tick(&data), Yield::gave_up());
    }

    #[test]
    fn nearby_enemy_preempts_target_once_per_cooldown() {
        let clock = Arc::new(ManualClock::new());
        let mut kill = kill_loop(clock.clone());
        let data = world(vec![zombie(1, 25), zombie(2, 2)]);

        let step = single(kill.tick(&data));
        assert_eq!(step.target(), Some(UnitId(2)));
        assert_eq!(step.skill(), Some(SkillId::Blizzard));
        assert_eq!(kill.completed_attack_loops, 0);

        assert_eq!(single(kill.tick(&data)).target(), Some(UnitId(1)));

        clock.advance(Duration::from_secs(4));
        assert_eq!(single(kill.tick(&data)).target(), Some(UnitId(1)));

        clock.advance(Duration::from_millis(1));
        assert_eq!(single(kill.tick(&data)).target(), Some(UnitId(2)));
    }

    #[test]
    fn skill_cooldown_falls_back_to_primary_attack() {
        let mut kill = kill_loop(Arc::new(ManualClock::new()));
        let mut data = world(vec![zombie(1, 25), zombie(2, 2)]);
        data.player_unit = data.player_unit.with_states(PlayerStates::COOLDOWN);

        let step = single(kill.tick(&data));
        assert!(matches!(
            step,
            Step::PrimaryAttack { target: UnitId(1), repeat: 2, interruptible: true, .. }
        ));
    }

    #[test]
    fn immune_target_stalls() {
        let mut kill = KillLoop::new(
            &sorceress(Arc::new(ManualClock::new())),
            first_enemy(),
            vec![Resist::Cold],
            None,
        );
        let data = world(vec![
            zombie(1, 25).with_resists(Resists::none().immune_to(Resist::Cold)),
        ]);

        assert_eq!(kill.tick(&data), Yield::stalled());
    }

    #[test]
    fn council_selection_prefers_vulnerable_members() {
        let cold_immune = Resists::none().immune_to(Resist::Cold);
        let mut members = vec![
            Monster::new(UnitId(1), NpcId::CouncilMember, Position::new(10, 0), 50)
                .with_resists(cold_immune),
            Monster::new(UnitId(2), NpcId::CouncilMember2, Position::new(10, 0), 50),
            Monster::new(UnitId(3), NpcId::CouncilMember3, Position::new(10, 0), 50)
                .with_resists(cold_immune),
            Monster::new(UnitId(4), NpcId::CouncilMember, Position::new(10, 0), 50),
            Monster::new(UnitId(5), NpcId::CouncilMember2, Position::new(10, 0), 50)
                .with_resists(cold_immune),
        ];

        let mut picked = Vec::new();
        while let Some(id) = select_council_member(&world(members.clone())) {
            picked.push(id);
            members.retain(|m| m.unit_id != id);
        }

        assert_eq!(picked, vec![UnitId(2), UnitId(4), UnitId(1), UnitId(3), UnitId(5)]);
    }

    #[test]
    fn key_binding_audit_accepts_any_armor() {
        let sorc = sorceress(Arc::new(ManualClock::new()));
        let mut data = world(Vec::new());
        data.key_bindings = KeyBindings::new()
            .with(SkillId::Blizzard, Key::function(1))
            .with(SkillId::Teleport, Key::function(2))
            .with(SkillId::TomeOfTownPortal, Key::function(3))
            .with(SkillId::ChillingArmor, Key::function(4));

        assert_eq!(sorc.check_key_bindings(&data), vec![SkillId::StaticField]);
        assert!(ensure_key_bindings(&sorc, &data).is_err());

        data.key_bindings.bind(SkillId::StaticField, Key::function(5));
        assert!(sorc.check_key_bindings(&data).is_empty());
    }

    #[test]
    fn buff_skills_pick_energy_shield_and_best_armor() {
        let sorc = sorceress(Arc::new(ManualClock::new()));
        let mut data = world(Vec::new());
        assert!(sorc.buff_skills(&data).is_empty());

        data.key_bindings = KeyBindings::new()
            .with(SkillId::FrozenArmor, Key::function(1))
            .with(SkillId::ShiverArmor, Key::function(2));
        assert_eq!(sorc.buff_skills(&data), vec![SkillId::ShiverArmor]);

        data.key_bindings.bind(SkillId::EnergyShield, Key::function(3));
        data.key_bindings.bind(SkillId::ChillingArmor, Key::function(4));
        assert_eq!(
            sorc.buff_skills(&data),
            vec![SkillId::EnergyShield, SkillId::ChillingArmor]
        );
        assert!(sorc.pre_cta_buff_skills(&data).is_empty());
    }
}
