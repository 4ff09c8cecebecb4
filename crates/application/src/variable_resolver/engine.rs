//! Placeholder substitution engine
//!
//! Resolves `{{variable}}` references against a suite [`Environment`].

use probe_domain::Environment;
use thiserror::Error;

use super::parser::{has_variables, parse_variables};

/// Substitution failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubstitutionError {
    /// A placeholder remained after substitution.
    #[error("unresolved variable in string: {template}")]
    UnresolvedVariable {
        /// The template as written, before substitution.
        template: String,
    },
}

/// Result of resolving one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The string with every known placeholder replaced.
    pub resolved: String,

    /// Names that were found in the environment.
    pub resolved_variables: Vec<String>,

    /// Names missing from the environment; their placeholders are kept verbatim.
    pub unresolved: Vec<String>,
}

impl ResolutionResult {
    /// Creates a result for input with no placeholders.
    #[must_use]
    pub fn no_variables(input: &str) -> Self {
        Self {
            resolved: input.to_string(),
            resolved_variables: Vec::new(),
            unresolved: Vec::new(),
        }
    }

    /// Whether every placeholder had a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Resolves placeholders against a borrowed environment.
#[derive(Debug, Clone, Copy)]
pub struct VariableResolver<'env> {
    env: &'env Environment,
}

impl<'env> VariableResolver<'env> {
    /// Creates a resolver over the given environment.
    #[must_use]
    pub const fn new(env: &'env Environment) -> Self {
        Self { env }
    }

    /// Replaces each known placeholder with its value in a single
    /// left-to-right pass. Unknown placeholders are left as written.
    #[must_use]
    pub fn resolve(&self, input: &str) -> ResolutionResult {
        let references = parse_variables(input);

        if references.is_empty() {
            return ResolutionResult::no_variables(input);
        }

        let mut resolved_vars = Vec::new();
        let mut unresolved = Vec::new();
        let mut result = String::with_capacity(input.len());
        let mut last_end = 0;

        for var_ref in references {
            result.push_str(&input[last_end..var_ref.span.start]);

            if let Some(value) = self.env.get(&var_ref.name) {
                result.push_str(value);
                resolved_vars.push(var_ref.name);
            } else {
                result.push_str(&input[var_ref.span.clone()]);
                unresolved.push(var_ref.name);
            }

            last_end = var_ref.span.end;
        }

        result.push_str(&input[last_end..]);

        ResolutionResult {
            resolved: result,
            resolved_variables: resolved_vars,
            unresolved,
        }
    }

    /// Resolves the template and fails if any placeholder pattern is left in
    /// the output.
    ///
    /// The check runs on the output, so a substituted value that itself
    /// looks like `{{name}}` also fails.
    ///
    /// # Errors
    ///
    /// Returns [`SubstitutionError::UnresolvedVariable`] carrying the
    /// original template.
    pub fn substitute(&self, template: &str) -> Result<String, SubstitutionError> {
        let result = self.resolve(template);

        if has_variables(&result.resolved) {
            return Err(SubstitutionError::UnresolvedVariable {
                template: template.to_string(),
            });
        }

        Ok(result.resolved)
    }
}

/// Substitutes `{{name}}` placeholders in `template` from `env`.
///
/// # Errors
///
/// See [`VariableResolver::substitute`].
pub fn substitute(template: &str, env: &Environment) -> Result<String, SubstitutionError> {
    VariableResolver::new(env).substitute(template)
}
