//! Scripted world the simulator runs kill sequences against.
//!
//! [`SimulatedWorld`] serves snapshots and keeps monster life; the
//! [`HidExecutor`] turns every step into input operations, runs them through
//! the [`OperationRunner`] and reports the finished step back to the world.
//! Simulated time only moves through the runner's pauses and wait steps.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use game_core::{
    GameData, KeyBindings, Monster, Monsters, PlayerStates, PlayerUnit, Position, SkillId, UnitId,
};
use runtime::{
    Clock, GameReader, HidOperation, InputDevice, KeyPress, ManualClock, MouseButton, MouseClick,
    MouseDisplacement, OperationRunner, Step, StepExecutor,
};

use crate::scenario::{DamageModel, Scenario};

/// Skill cooldown Blizzard puts the player in.
const BLIZZARD_COOLDOWN: Duration = Duration::from_secs(1);

const SCREEN_CENTER: (i32, i32) = (640, 360);
const TILE_PIXELS: (i32, i32) = (16, 8);

const KEY_DELAY: Duration = Duration::from_millis(50);
const POINTER_DELAY: Duration = Duration::from_millis(60);
const SWING_DELAY: Duration = Duration::from_millis(180);
const CAST_DELAY: Duration = Duration::from_millis(400);

struct Spawn {
    monster: Monster,
    appears_after: Duration,
}

struct WorldState {
    clock: Arc<ManualClock>,
    player: PlayerUnit,
    key_bindings: KeyBindings,
    spawns: Vec<Spawn>,
    damage: DamageModel,
    cooldown_until: Duration,
}

impl WorldState {
    fn visible(&self) -> impl Iterator<Item = &Spawn> {
        let now = self.clock.now();
        self.spawns.iter().filter(move |s| s.appears_after <= now)
    }

    fn monster_mut(&mut self, id: UnitId) -> Option<&mut Monster> {
        let now = self.clock.now();
        self.spawns
            .iter_mut()
            .find(|s| s.monster.unit_id == id && s.appears_after <= now)
            .map(|s| &mut s.monster)
    }

    fn hit(&mut self, id: UnitId, amount: i32) {
        if let Some(monster) = self.monster_mut(id) {
            monster.life = monster.life.saturating_sub(amount).max(0);
            tracing::debug!(unit = %id, life = monster.life, amount, "monster hit");
            if !monster.is_alive() {
                tracing::info!(unit = %id, monster = %monster.name, "monster killed");
            }
        }
    }
}

/// Shared handle on the scripted world.
#[derive(Clone)]
pub struct SimulatedWorld(Rc<RefCell<WorldState>>);

impl SimulatedWorld {
    pub fn from_scenario(scenario: &Scenario, clock: Arc<ManualClock>) -> Self {
        let spawns = scenario
            .monsters
            .iter()
            .map(|m| Spawn {
                monster: m.to_monster(),
                appears_after: m.appears_after(),
            })
            .collect();

        Self(Rc::new(RefCell::new(WorldState {
            clock,
            player: scenario.player.clone(),
            key_bindings: scenario.key_bindings.clone(),
            spawns,
            damage: scenario.damage.clone(),
            cooldown_until: Duration::ZERO,
        })))
    }

    /// Live hostile monsters, whether they have appeared yet or not.
    pub fn survivors(&self) -> usize {
        let state = self.0.borrow();
        state
            .spawns
            .iter()
            .filter(|s| s.monster.hostile && s.monster.is_alive())
            .count()
    }

    pub fn key_bindings(&self) -> KeyBindings {
        self.0.borrow().key_bindings.clone()
    }

    fn position_of(&self, id: UnitId) -> Option<Position> {
        self.0
            .borrow()
            .visible()
            .find(|s| s.monster.unit_id == id)
            .map(|s| s.monster.position)
    }

    fn player_position(&self) -> Position {
        self.0.borrow().player.position
    }

    /// Applies the effect of a step that was carried out.
    fn apply(&self, step: &Step) {
        let mut guard = self.0.borrow_mut();
        let state = &mut *guard;
        let damage = state.damage.clone();
        match *step {
            Step::PrimaryAttack { target, repeat, .. } => {
                state.hit(target, damage.primary.saturating_mul(hits(repeat)));
            }
            Step::SecondaryAttack { skill: SkillId::Blizzard, target, repeat, .. } => {
                state.hit(target, damage.blizzard.saturating_mul(hits(repeat)));
                let now = state.clock.now();
                state.cooldown_until = now + BLIZZARD_COOLDOWN;
            }
            Step::SecondaryAttack { skill: SkillId::StaticField, target, repeat, .. } => {
                for _ in 0..repeat {
                    let Some(monster) = state.monster_mut(target) else {
                        break;
                    };
                    let amount = monster.life.saturating_mul(damage.static_field_percent) / 100;
                    state.hit(target, amount);
                }
            }
            Step::SecondaryAttack { .. } | Step::Wait(_) => {}
        }
    }
}

impl GameReader for SimulatedWorld {
    fn game_data(&mut self) -> GameData {
        let state = self.0.borrow();
        let mut player = state.player.clone();
        if state.clock.now() < state.cooldown_until {
            player.states |= PlayerStates::COOLDOWN;
        }
        let monsters: Monsters = state.visible().map(|s| s.monster.clone()).collect();
        GameData::new(player, monsters, state.key_bindings.clone())
    }
}

/// Executes steps as input operations on a device.
pub struct HidExecutor<D> {
    world: SimulatedWorld,
    runner: OperationRunner<D>,
    clock: Arc<dyn Clock>,
    executed: usize,
}

impl<D: InputDevice> HidExecutor<D> {
    pub fn new(world: SimulatedWorld, runner: OperationRunner<D>, clock: Arc<dyn Clock>) -> Self {
        Self {
            world,
            runner,
            clock,
            executed: 0,
        }
    }

    /// Steps carried out so far.
    pub fn executed(&self) -> usize {
        self.executed
    }

    pub fn device(&self) -> &D {
        self.runner.device()
    }

    /// Presses the key bound to `skill` and clicks at the player, for buffs.
    pub fn cast_on_self(&mut self, skill: SkillId) -> bool {
        let Some(binding) = self.world.key_bindings().key_binding_for_skill(skill) else {
            tracing::warn!(%skill, "buff skill is not bound");
            return false;
        };
        let (x, y) = SCREEN_CENTER;
        let sequence: Vec<Box<dyn HidOperation>> = vec![
            Box::new(KeyPress::new(binding.primary, KEY_DELAY)),
            Box::new(MouseDisplacement::new(x, y, POINTER_DELAY)),
            Box::new(MouseClick::new(MouseButton::Right, CAST_DELAY)),
        ];
        self.runner.run(sequence);
        true
    }

    fn attack(&mut self, key: Option<SkillId>, target: UnitId, repeat: u32, button: MouseButton) -> bool {
        let Some(position) = self.world.position_of(target) else {
            tracing::debug!(unit = %target, "attack target not visible");
            return false;
        };

        let mut sequence: Vec<Box<dyn HidOperation>> = Vec::new();
        if let Some(skill) = key {
            let Some(binding) = self.world.key_bindings().key_binding_for_skill(skill) else {
                tracing::warn!(%skill, "skill is not bound, cast skipped");
                return false;
            };
            sequence.push(Box::new(KeyPress::new(binding.primary, KEY_DELAY)));
        }

        let (x, y) = screen_position(self.world.player_position(), position);
        sequence.push(Box::new(MouseDisplacement::new(x, y, POINTER_DELAY)));
        let delay = match button {
            MouseButton::Left => SWING_DELAY,
            MouseButton::Right => CAST_DELAY,
        };
        for _ in 0..repeat {
            sequence.push(Box::new(MouseClick::new(button, delay)));
        }

        self.runner.run(sequence);
        true
    }
}

impl<D: InputDevice> StepExecutor for HidExecutor<D> {
    fn execute(&mut self, step: &Step) {
        let done = match *step {
            Step::PrimaryAttack { target, repeat, .. } => {
                self.attack(None, target, repeat, MouseButton::Left)
            }
            Step::SecondaryAttack { skill, target, repeat, .. } => {
                self.attack(Some(skill), target, repeat, MouseButton::Right)
            }
            Step::Wait(duration) => {
                self.clock.sleep(duration);
                true
            }
        };

        if done {
            self.world.apply(step);
            self.executed += 1;
        }
    }
}

fn hits(repeat: u32) -> i32 {
    i32::try_from(repeat).unwrap_or(i32::MAX)
}

/// Screen coordinates of a world position, with the player at the center.
fn screen_position(player: Position, target: Position) -> (i32, i32) {
    let (cx, cy) = SCREEN_CENTER;
    let (tx, ty) = TILE_PIXELS;
    (
        cx + (target.x - player.x) * tx,
        cy + (target.y - player.y) * ty,
    )
}
