//! SimuHub Types
//!
//! This crate defines the input-side types shared by the SimuHub crates
//! (currently `simuhub-calculator` and `simuhub-runner`): the declared shape of
//! a simulation input, the values a running simulation holds, and the coercion
//! rule that turns raw user entries into those values.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod types;
pub use types::{FieldType, FieldValue, FieldValues, InputField, coerce_number};
