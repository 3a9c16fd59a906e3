//! Scenario simulator binary.
//!
//! Loads a scenario, runs its kill sequence against the simulated world and
//! prints a summary.
//!
//! # Examples
//!
//! ```bash
//! # Scenario path from the command line
//! cargo run -p bot-client -- scenarios/diablo.json
//!
//! # Deterministic input timing and verbose decisions
//! SIM_SEED=7 RUST_LOG=runtime=debug cargo run -p bot-client -- scenarios/council.json
//! ```

use anyhow::{Context, Result};
use bot_client::{Scenario, SimulatorConfig, logging, simulate};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let mut config = SimulatorConfig::from_env();
    if let Some(path) = std::env::args_os().nth(1) {
        config.scenario_path = path.into();
    }

    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    let scenario = Scenario::load(&config.scenario_path)
        .with_context(|| format!("loading {}", config.scenario_path.display()))?;
    tracing::info!(scenario = %scenario.name, monsters = scenario.monsters.len(), "scenario loaded");

    let report = simulate(&scenario, &config)?;
    println!("{report}");

    tracing::info!(status = ?report.status, "simulation finished");
    Ok(())
}
