#![deny(warnings)]
//! The simulation catalog for SimuHub.
//!
//! This crate provides the `SimulationDefinition` record, the `SimulationInputs`
//! accessor handed to compute functions, and the built-in, process-wide
//! [`catalog()`] grouping every simulation by category.

use serde::Serialize;
use simuhub_types::{FieldValue, FieldValues, InputField};
use tracing::trace;

pub mod built_in;
pub mod catalog;
pub mod error;
pub mod output;
pub mod preorder;

pub use catalog::{Catalog, CatalogBuilder, Category, CategoryEntry, catalog};
pub use error::CatalogError;
pub use output::{ResultLine, ResultValue, SimulationOutput};

/// Signature shared by every compute function.
pub type ComputeFn = fn(&SimulationInputs<'_>) -> SimulationOutput;

/// Read-only view of a simulation's value mapping.
///
/// Lookups never fail: a missing or mistyped number reads as `NaN`, so every
/// compute function stays total over whatever mapping it is given.
#[derive(Debug, Clone, Copy)]
pub struct SimulationInputs<'a> {
    values: &'a FieldValues,
}

impl<'a> SimulationInputs<'a> {
    /// Creates a new `SimulationInputs`.
    pub fn new(values: &'a FieldValues) -> Self {
        Self { values }
    }

    /// Gets a number, or `NaN` when the field is absent or not numeric.
    pub fn number(&self, id: &str) -> f64 {
        self.values
            .get(id)
            .and_then(FieldValue::as_number)
            .unwrap_or(f64::NAN)
    }

    /// Gets a text value, or `None` when the field is absent or numeric.
    pub fn text(&self, id: &str) -> Option<&'a str> {
        self.values.get(id).and_then(FieldValue::as_text)
    }
}

/// One formula-backed calculator.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationDefinition {
    /// Unique within its category
    pub id: &'static str,
    /// Display name
    pub label: &'static str,
    /// One-sentence summary shown in listings
    pub description: &'static str,
    /// Declared inputs, in display and argument order
    pub inputs: Vec<InputField>,
    #[serde(skip)]
    compute: ComputeFn,
}

impl SimulationDefinition {
    pub fn new(
        id: &'static str,
        label: &'static str,
        description: &'static str,
        inputs: Vec<InputField>,
        compute: ComputeFn,
    ) -> Self {
        Self {
            id,
            label,
            description,
            inputs,
            compute,
        }
    }

    /// Looks up a declared input by id.
    pub fn input(&self, id: &str) -> Option<&InputField> {
        self.inputs.iter().find(|field| field.id == id)
    }

    /// A fresh value mapping seeded from every input's default.
    pub fn default_values(&self) -> FieldValues {
        self.inputs
            .iter()
            .map(|field| (field.id.to_string(), field.default_value.clone()))
            .collect()
    }

    /// Evaluates the formula against the complete value mapping.
    pub fn compute(&self, values: &FieldValues) -> SimulationOutput {
        let output = (self.compute)(&SimulationInputs::new(values));
        trace!(simulation = self.id, result = %output, "computed simulation");
        output
    }

    /// Evaluates the formula with the declared defaults.
    pub fn compute_defaults(&self) -> SimulationOutput {
        self.compute(&self.default_values())
    }

    /// Case-insensitive substring match on id, label or description.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        let q = query.trim().to_lowercase();
        self.id.to_lowercase().contains(&q)
            || self.label.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
    }
}
