//! JSON response assertions
//!
//! Extracts values from a JSON document by path and checks them against
//! expected literals (printed-form equality) or `>`/`<` numeric rules.

mod error;
mod evaluator;
mod path;
mod render;

pub use error::{AssertionError, ComparisonOperator};
pub use evaluator::{ComparisonRule, assert_json, evaluate};
pub use path::{Extracted, LENGTH_PATH, extract_value};
pub use render::{NumberStyle, format_float, render_value};
