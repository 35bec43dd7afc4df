//! Built-in simulations shipped with SimuHub, one module per category.

use crate::catalog::{Catalog, Category};

pub mod business;
pub mod chemistry;
pub mod finance;
pub mod physics;
pub mod trees;

/// Assembles the built-in catalog in listing order.
pub(crate) fn catalog() -> Catalog {
    Catalog::builder()
        .register_all(Category::Chemistry, chemistry::simulations())
        .register_all(Category::Physics, physics::simulations())
        .register_all(Category::Finance, finance::simulations())
        .register_all(Category::BusinessStrategies, business::simulations())
        .register_all(Category::DecisionTrees, trees::simulations())
        .build_unchecked()
}
