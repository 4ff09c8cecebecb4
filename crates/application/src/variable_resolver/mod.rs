//! Variable substitution module
//!
//! Provides parsing and resolution of `{{variable}}` placeholders in request
//! paths and header values.
//!
//! # Usage
//!
//! ```
//! use probe_application::variable_resolver::substitute;
//! use probe_domain::Environment;
//!
//! let env = Environment::new().with_variable("id", "7");
//! assert_eq!(substitute("/items/{{id}}", &env).unwrap(), "/items/7");
//! assert!(substitute("/items/{{other}}", &env).is_err());
//! ```

pub mod engine;
pub mod parser;

pub use engine::{ResolutionResult, SubstitutionError, VariableResolver, substitute};
pub use parser::{VariableReference, has_variables, parse_variables};
