//! Validation rules.
//!
//! A [`RuleSet`] holds presence rules (a variable must be set to a
//! non-empty value) and value-matching rules (a variable must hold an exact
//! value), each either global or scoped to a deployment environment.
//!
//! - [`set`] - The rule set and its chainable builder operations
//! - [`value`] - Expected values and ordered value-matching maps

pub mod set;
pub mod value;

pub use set::RuleSet;
pub use value::{ExpectedValue, ValueRules};
