//! A single running simulation.
//!
//! The session borrows its definition from the catalog and owns a value
//! mapping seeded from the declared defaults. Every edit recomputes with the
//! complete mapping, so the stored result never lags behind the last edit.
//! Dropping or closing the session discards the mapping.

use crate::error::RunnerError;
use simuhub_calculator::{Category, SimulationDefinition, SimulationOutput};
use simuhub_types::{FieldType, FieldValue, FieldValues};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// One open simulation: its current values and the result computed from them.
#[derive(Debug)]
pub struct SimulationSession<'c> {
    category: Category,
    definition: &'c SimulationDefinition,
    values: FieldValues,
    result: SimulationOutput,
    opened_at: Instant,
    loading_delay: Duration,
}

impl<'c> SimulationSession<'c> {
    /// Opens a session with every input at its default.
    #[instrument(skip(definition), fields(simulation = definition.id))]
    pub fn start(
        category: Category,
        definition: &'c SimulationDefinition,
        loading_delay: Duration,
    ) -> Self {
        let values = definition.default_values();
        let result = definition.compute(&values);
        debug!(result = %result, "simulation started");
        Self {
            category,
            definition,
            values,
            result,
            opened_at: Instant::now(),
            loading_delay,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn definition(&self) -> &'c SimulationDefinition {
        self.definition
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.values.get(id)
    }

    /// Result for the current values
    pub fn result(&self) -> &SimulationOutput {
        &self.result
    }

    /// Coerces a raw entry per the field's declared type, stores it and recomputes.
    #[instrument(skip(self), fields(simulation = self.definition.id))]
    pub fn set_field(&mut self, id: &str, raw: &str) -> Result<&SimulationOutput, RunnerError> {
        let definition = self.definition;
        let field = definition.input(id).ok_or_else(|| RunnerError::UnknownField {
            simulation: definition.id.to_string(),
            field: id.to_string(),
        })?;
        let value = field.coerce(raw);
        debug!(field = field.id, value = %value, "field edited");
        self.values.insert(field.id.to_string(), value);
        Ok(self.recompute())
    }

    /// Stores an already-typed value, converting it when it does not match the
    /// declared type, and recomputes.
    pub fn set_value(
        &mut self,
        id: &str,
        value: FieldValue,
    ) -> Result<&SimulationOutput, RunnerError> {
        let declared = self.definition.input(id).map(|field| field.field_type);
        match (declared, value) {
            (Some(FieldType::Number), FieldValue::Number(n)) => {
                self.values.insert(id.to_string(), FieldValue::Number(n));
                Ok(self.recompute())
            }
            (_, FieldValue::Text(raw)) => self.set_field(id, &raw),
            (_, number) => self.set_field(id, &number.to_string()),
        }
    }

    /// Puts every field back to its default.
    pub fn reset(&mut self) -> &SimulationOutput {
        self.values = self.definition.default_values();
        self.recompute()
    }

    fn recompute(&mut self) -> &SimulationOutput {
        self.result = self.definition.compute(&self.values);
        debug!(simulation = self.definition.id, result = %self.result, "recomputed");
        &self.result
    }

    /// Whether the cosmetic loading delay is still running at `now`
    pub fn is_loading(&self, now: Instant) -> bool {
        !self.remaining_delay(now).is_zero()
    }

    pub fn remaining_delay(&self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.opened_at);
        self.loading_delay.saturating_sub(elapsed)
    }

    /// The result, or `None` while the loading delay is still running.
    pub fn visible_result(&self, now: Instant) -> Option<&SimulationOutput> {
        if self.is_loading(now) {
            None
        } else {
            Some(&self.result)
        }
    }

    /// Closes the session, discarding its values.
    pub fn close(self) {
        debug!(simulation = self.definition.id, "simulation closed");
    }
}
