//! Simulator configuration structures and loaders.

use std::env;
use std::path::PathBuf;

use runtime::SorceressConfig;

/// Everything the simulator binary needs besides the scenario itself.
#[derive(Clone, Debug)]
pub struct SimulatorConfig {
    pub scenario_path: PathBuf,
    pub session_id: Option<String>,
    /// Seed of the input-timing jitter. Unset means OS entropy.
    pub seed: Option<u64>,
    pub sorceress: SorceressConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            scenario_path: PathBuf::from("scenario.json"),
            session_id: None,
            seed: None,
            sorceress: SorceressConfig::default(),
        }
    }
}

impl SimulatorConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIM_SCENARIO` - Scenario file (default: scenario.json)
    /// - `SIM_SESSION_ID` - Log session name (default: timestamp)
    /// - `SIM_SEED` - Jitter seed (default: random)
    /// - `SORC_*` - Controller tuning, see [`SorceressConfig::from_env`]
    pub fn from_env() -> Self {
        let mut config = Self {
            sorceress: SorceressConfig::from_env(),
            ..Self::default()
        };

        if let Some(path) = read_env::<PathBuf>("SIM_SCENARIO") {
            config.scenario_path = path;
        }
        config.session_id = read_env::<String>("SIM_SESSION_ID").filter(|s| !s.is_empty());
        config.seed = read_env::<u64>("SIM_SEED");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
