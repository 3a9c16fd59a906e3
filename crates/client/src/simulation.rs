//! One simulated run of a scenario.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use action_chain::Status;
use game_core::SkillId;
use rand::SeedableRng;
use rand::rngs::StdRng;
use runtime::{
    BaseCharacter, BlizzardSorceress, Character, Clock, ManualClock, OperationRunner, Runtime,
    RuntimeError, StraightLinePather,
};

use crate::config::SimulatorConfig;
use crate::device::LoggingDevice;
use crate::scenario::Scenario;
use crate::world::{HidExecutor, SimulatedWorld};

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub scenario: String,
    pub status: Status,
    pub ticks: u32,
    pub steps: usize,
    pub inputs: u32,
    pub elapsed: Duration,
    pub survivors: usize,
    pub missing_bindings: Vec<SkillId>,
    pub buffs: Vec<SkillId>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scenario:   {}", self.scenario)?;
        writeln!(f, "status:     {:?}", self.status)?;
        writeln!(f, "ticks:      {}", self.ticks)?;
        writeln!(f, "steps:      {}", self.steps)?;
        writeln!(f, "inputs:     {}", self.inputs)?;
        writeln!(f, "elapsed:    {:.1}s", self.elapsed.as_secs_f64())?;
        writeln!(f, "survivors:  {}", self.survivors)?;
        if !self.missing_bindings.is_empty() {
            writeln!(f, "unbound:    {:?}", self.missing_bindings)?;
        }
        write!(f, "buffs:      {:?}", self.buffs)
    }
}

/// Runs the scenario's kill sequence with a Blizzard Sorceress.
///
/// Missing key bindings are reported but do not prevent the run; only an
/// invalid controller configuration does.
pub fn simulate(scenario: &Scenario, config: &SimulatorConfig) -> Result<Report, RuntimeError> {
    config.sorceress.validate()?;

    let clock = Arc::new(ManualClock::new());
    let world = SimulatedWorld::from_scenario(scenario, clock.clone());
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let runner = OperationRunner::with_rng(LoggingDevice::new(), clock.clone(), rng);
    let executor = HidExecutor::new(world.clone(), runner, clock.clone());

    let sorceress = BlizzardSorceress::new(
        BaseCharacter::new(Arc::new(StraightLinePather), clock.clone()),
        config.sorceress.clone(),
    );
    let mut runtime = Runtime::new(world.clone(), executor);

    let data = runtime.game_data();
    let missing_bindings = sorceress.check_key_bindings(&data);
    if !missing_bindings.is_empty() {
        tracing::warn!(missing = ?missing_bindings, "running with unbound skills");
    }

    let mut buffs = sorceress.pre_cta_buff_skills(&data);
    buffs.extend(sorceress.buff_skills(&data));
    for skill in &buffs {
        runtime.executor_mut().cast_on_self(*skill);
    }

    tracing::info!(scenario = %scenario.name, sequence = ?scenario.sequence, "starting kill sequence");
    let mut action = scenario.sequence.build(&sorceress);
    let outcome = runtime.run(&mut action);

    let executor = runtime.executor();
    Ok(Report {
        scenario: scenario.name.clone(),
        status: outcome.status,
        ticks: outcome.ticks,
        steps: executor.executed(),
        inputs: executor.device().total(),
        elapsed: clock.now(),
        survivors: world.survivors(),
        missing_bindings,
        buffs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulatorConfig {
        SimulatorConfig {
            seed: Some(7),
            ..SimulatorConfig::default()
        }
    }

    #[test]
    fn andariel_dies_with_full_bindings() {
        let scenario = Scenario::from_json(
            r#"{
                "name": "catacombs",
                "key_bindings": {
                    "blizzard": { "primary": 113 },
                    "teleport": { "primary": 114 },
                    "tome_of_town_portal": { "primary": 115 },
                    "frozen_armor": { "primary": 116 },
                    "static_field": { "primary": 117 },
                    "energy_shield": { "primary": 118 }
                },
                "monsters": [
                    { "id": 1, "name": "andariel", "position": { "x": 20, "y": 0 }, "life": 200 }
                ],
                "sequence": "andariel"
            }"#,
        )
        .expect("scenario parses");

        let report = simulate(&scenario, &config()).expect("valid config");

        assert_eq!(report.status, Status::Completed);
        assert_eq!(report.survivors, 0);
        assert!(report.missing_bindings.is_empty());
        assert_eq!(report.buffs, vec![SkillId::EnergyShield, SkillId::FrozenArmor]);
        assert!(report.steps > 0);
        assert!(report.inputs as usize > report.steps);
        assert!(report.elapsed > Duration::ZERO);
    }

    #[test]
    fn unbound_blizzard_runs_into_attack_budget() {
        let scenario = Scenario::from_json(
            r#"{
                "name": "no keys",
                "monsters": [
                    { "id": 1, "name": "duriel", "position": { "x": 20, "y": 0 }, "life": 5000 }
                ],
                "sequence": "duriel"
            }"#,
        )
        .expect("scenario parses");

        let report = simulate(&scenario, &config()).expect("valid config");

        assert_eq!(report.status, Status::GaveUp);
        assert_eq!(report.survivors, 1);
        assert_eq!(report.steps, 0);
        assert_eq!(report.missing_bindings.len(), 5);
    }

    #[test]
    fn invalid_tuning_is_rejected() {
        let mut config = config();
        config.sorceress.max_attack_loops = 0;
        let scenario =
            Scenario::from_json(r#"{ "name": "x", "sequence": "baal" }"#).expect("scenario parses");

        assert!(matches!(
            simulate(&scenario, &config),
            Err(RuntimeError::InvalidConfig { key: "max_attack_loops", .. })
        ));
    }
}
