//! Scenario simulator for the bot runtime.
//!
//! # Architecture
//!
//! ```text
//! Scenario (JSON)
//!   └─→ SimulatedWorld ──snapshots──→ Runtime ──steps──→ HidExecutor
//!          ↑                                                │
//!          └──────────── damage, cooldowns ─────────────────┤
//!                                                           ↓
//!                                     OperationRunner → LoggingDevice
//! ```
//!
//! The simulator is the composition root of the workspace: it assembles a
//! controller, a scripted world and a logging input device around one
//! [`ManualClock`](runtime::ManualClock), so a whole boss fight runs in
//! simulated time.

pub mod config;
pub mod device;
pub mod logging;
pub mod scenario;
pub mod simulation;
pub mod world;

pub use config::SimulatorConfig;
pub use scenario::{KillSequence, Scenario, ScenarioError};
pub use simulation::{Report, simulate};
