//! Error types for catalog lookups and catalog construction.
//!
//! Compute functions never fail; these errors only arise when a caller names a
//! category or simulation that does not exist, or when a catalog is assembled
//! from definitions that break its invariants.

use thiserror::Error;

/// Errors raised by [`crate::Catalog`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown category '{key}'")]
    CategoryNotFound { key: String },

    #[error("Simulation '{id}' not found in category '{category}'")]
    SimulationNotFound { category: String, id: String },

    #[error("Simulation '{id}' registered twice in category '{category}'")]
    DuplicateSimulation { category: String, id: String },

    #[error("Simulation '{simulation}' declares input '{field}' more than once")]
    DuplicateField { simulation: String, field: String },

    #[error("Input '{field}' of simulation '{simulation}' has a default of the wrong type")]
    InvalidDefault { simulation: String, field: String },
}

impl CatalogError {
    /// Short label for the `error_category` log field
    pub fn category(&self) -> &'static str {
        match self {
            CatalogError::CategoryNotFound { .. } | CatalogError::SimulationNotFound { .. } => {
                "lookup"
            }
            CatalogError::DuplicateSimulation { .. }
            | CatalogError::DuplicateField { .. }
            | CatalogError::InvalidDefault { .. } => "definition",
        }
    }
}
