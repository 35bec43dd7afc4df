//! Running SimuHub simulations.
//!
//! A [`SimulationRunner`] hosts at most one [`SimulationSession`] at a time.
//! Each session seeds its values from the simulation's declared defaults,
//! recomputes on every edit and is discarded when closed. The `simuhub`
//! binary drives the runner through the [`cli`] module.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod session;

pub use config::{ConfigSource, LoggingConfig, RunnerConfig, SimuHubConfig};
pub use error::RunnerError;
pub use runner::SimulationRunner;
pub use session::SimulationSession;
