//! Host for the one simulation that may be open at a time.

use crate::config::RunnerConfig;
use crate::error::RunnerError;
use crate::session::SimulationSession;
use simuhub_calculator::{Catalog, Category, SimulationDefinition, SimulationOutput};
use std::time::Duration;
use tracing::{info, warn};

/// Owns the open [`SimulationSession`], if any, over a borrowed catalog.
///
/// Opening a simulation closes the previous one, so at most one session is
/// alive at a time.
pub struct SimulationRunner<'c> {
    catalog: &'c Catalog,
    loading_delay: Duration,
    active: Option<SimulationSession<'c>>,
}

impl<'c> SimulationRunner<'c> {
    /// A runner with nothing open. Sessions inherit `config.loading_delay_ms`.
    pub fn new(catalog: &'c Catalog, config: &RunnerConfig) -> Self {
        Self {
            catalog,
            loading_delay: config.loading_delay(),
            active: None,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Opens a simulation, closing whatever was open before.
    ///
    /// A failed lookup leaves the current session open.
    pub fn open(
        &mut self,
        category: &str,
        id: &str,
    ) -> Result<&mut SimulationSession<'c>, RunnerError> {
        let (category, definition) = self.lookup(category, id).inspect_err(|err| {
            warn!(
                category,
                simulation = id,
                error = %err,
                error_category = err.category(),
                "cannot open simulation"
            );
        })?;
        self.close();
        info!(
            category = category.key(),
            simulation = definition.id,
            "opening simulation"
        );
        let session = SimulationSession::start(category, definition, self.loading_delay);
        Ok(self.active.insert(session))
    }

    fn lookup(
        &self,
        category: &str,
        id: &str,
    ) -> Result<(Category, &'c SimulationDefinition), RunnerError> {
        let category: Category = category.parse()?;
        let definition = self.catalog.find(category.key(), id)?;
        Ok((category, definition))
    }

    /// Whether a simulation is open
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&SimulationSession<'c>> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut SimulationSession<'c>> {
        self.active.as_mut()
    }

    /// Edits a field of the open simulation and returns the new result.
    pub fn edit(&mut self, field: &str, raw: &str) -> Result<&SimulationOutput, RunnerError> {
        self.active
            .as_mut()
            .ok_or(RunnerError::NoActiveSimulation)?
            .set_field(field, raw)
    }

    /// Closes the open simulation. Returns whether one was open.
    pub fn close(&mut self) -> bool {
        match self.active.take() {
            Some(session) => {
                session.close();
                true
            }
            None => false,
        }
    }
}
