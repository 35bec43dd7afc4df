//! Category-keyed registry of simulation definitions.
//!
//! Categories and the simulations inside them keep their registration order,
//! which is also the order they are listed in.

use crate::SimulationDefinition;
use crate::built_in;
use crate::error::CatalogError;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A named grouping of simulations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Chemistry,
    Physics,
    Finance,
    BusinessStrategies,
    DecisionTrees,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Chemistry,
        Category::Physics,
        Category::Finance,
        Category::BusinessStrategies,
        Category::DecisionTrees,
    ];

    /// Stable lookup key
    pub const fn key(self) -> &'static str {
        match self {
            Category::Chemistry => "chemistry",
            Category::Physics => "physics",
            Category::Finance => "finance",
            Category::BusinessStrategies => "business-strategies",
            Category::DecisionTrees => "decision-trees",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Chemistry => "Chemistry",
            Category::Physics => "Physics",
            Category::Finance => "Finance",
            Category::BusinessStrategies => "Business Strategies",
            Category::DecisionTrees => "Decision Trees",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Category::Chemistry => "Explore interactive chemistry models and simulations.",
            Category::Physics => "Dive deep into physics simulations and experiments.",
            Category::Finance => "Master financial modeling and simulations.",
            Category::BusinessStrategies => {
                "Learn and implement top business strategies and practices."
            }
            Category::DecisionTrees => "Reason about the shape, depth and traversal of trees.",
        }
    }

    /// Resolves a key or display label, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.into_iter().find(|c| c.is_named(key))
    }

    fn is_named(self, name: &str) -> bool {
        self.key().eq_ignore_ascii_case(name) || self.label().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let not_found = || CatalogError::CategoryNotFound { key: s.to_string() };
        Self::from_key(s).ok_or_else(not_found)
    }
}

/// One category and its ordered simulations
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    pub category: Category,
    pub simulations: Vec<SimulationDefinition>,
}

impl CategoryEntry {
    fn iter(&self) -> impl Iterator<Item = (Category, &SimulationDefinition)> + '_ {
        let category = self.category;
        self.simulations.iter().map(move |def| (category, def))
    }
}

/// Immutable registry of every simulation, grouped by category.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CategoryEntry>,
}

static CATALOG: Lazy<Catalog> = Lazy::new(built_in::catalog);

/// The built-in catalog. Built on first access and shared for the process lifetime.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    /// Categories in listing order
    pub fn categories(&self) -> Vec<Category> {
        self.entries.iter().map(|entry| entry.category).collect()
    }

    /// Category keys in listing order
    pub fn category_keys(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .map(|entry| entry.category.key())
            .collect()
    }

    /// Simulations of the category named by `key`.
    ///
    /// Unknown keys, and categories this catalog holds nothing for, are
    /// reported as [`CatalogError::CategoryNotFound`].
    pub fn simulations(&self, key: &str) -> Result<&[SimulationDefinition], CatalogError> {
        let not_found = || CatalogError::CategoryNotFound {
            key: key.to_string(),
        };
        let category = Category::from_key(key).ok_or_else(not_found)?;
        self.entry(category)
            .map(|entry| entry.simulations.as_slice())
            .ok_or_else(not_found)
    }

    fn entry(&self, category: Category) -> Option<&CategoryEntry> {
        self.entries.iter().find(|entry| entry.category == category)
    }

    /// Looks up one simulation by category key and id.
    pub fn find(&self, key: &str, id: &str) -> Result<&SimulationDefinition, CatalogError> {
        let simulations = self.simulations(key)?;
        simulations.iter().find(|def| def.id == id).ok_or_else(|| {
            debug!(category = key, simulation = id, "simulation lookup missed");
            CatalogError::SimulationNotFound {
                category: key.to_string(),
                id: id.to_string(),
            }
        })
    }

    /// Every simulation with its category, in listing order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &SimulationDefinition)> + '_ {
        self.entries.iter().flat_map(CategoryEntry::iter)
    }

    /// Simulations whose id, label or description contains `query`.
    pub fn search(&self, query: &str) -> Vec<(Category, &SimulationDefinition)> {
        self.iter()
            .filter(|(_, def)| def.matches_query(query))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.simulations.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that ids are unique and every default matches its declared type.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for entry in &self.entries {
            let mut ids = HashSet::new();
            for def in &entry.simulations {
                if !ids.insert(def.id) {
                    return Err(CatalogError::DuplicateSimulation {
                        category: entry.category.key().to_string(),
                        id: def.id.to_string(),
                    });
                }
                validate_definition(def)?;
            }
        }
        Ok(())
    }
}

fn validate_definition(def: &SimulationDefinition) -> Result<(), CatalogError> {
    let mut fields = HashSet::new();
    for field in &def.inputs {
        if !fields.insert(field.id) {
            return Err(CatalogError::DuplicateField {
                simulation: def.id.to_string(),
                field: field.id.to_string(),
            });
        }
        if !field.has_valid_default() {
            return Err(CatalogError::InvalidDefault {
                simulation: def.id.to_string(),
                field: field.id.to_string(),
            });
        }
    }
    Ok(())
}

/// Collects definitions before freezing them into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: Vec<CategoryEntry>,
}

impl CatalogBuilder {
    pub fn register(mut self, category: Category, definition: SimulationDefinition) -> Self {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.category == category) {
            entry.simulations.push(definition);
        } else {
            self.entries.push(CategoryEntry {
                category,
                simulations: vec![definition],
            });
        }
        self
    }

    pub fn register_all(
        self,
        category: Category,
        definitions: impl IntoIterator<Item = SimulationDefinition>,
    ) -> Self {
        definitions
            .into_iter()
            .fold(self, |builder, def| builder.register(category, def))
    }

    /// Freezes the catalog after checking its invariants.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let catalog = self.build_unchecked();
        catalog.validate()?;
        Ok(catalog)
    }

    pub(crate) fn build_unchecked(self) -> Catalog {
        Catalog {
            entries: self.entries,
        }
    }
}
