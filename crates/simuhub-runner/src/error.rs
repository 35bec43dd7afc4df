//! Errors raised at the edit boundary of a running simulation.

use simuhub_calculator::CatalogError;
use thiserror::Error;

/// Errors raised by [`crate::SimulationSession`] and [`crate::SimulationRunner`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunnerError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Simulation '{simulation}' has no input named '{field}'")]
    UnknownField { simulation: String, field: String },

    #[error("No simulation is open")]
    NoActiveSimulation,
}

impl RunnerError {
    /// Short label for the `error_category` log field
    pub fn category(&self) -> &'static str {
        match self {
            RunnerError::Catalog(err) => err.category(),
            RunnerError::UnknownField { .. } => "edit",
            RunnerError::NoActiveSimulation => "session",
        }
    }
}
