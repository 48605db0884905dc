//! Advisory validation.
//!
//! Reports schema-completeness and value-coverage problems without
//! blocking anything itself: rendering with an empty-description variable
//! is still well-defined, and the caller decides which operations to gate
//! on these findings (e.g. refusing to finalize a template whose schema
//! is incomplete).

use std::collections::BTreeMap;

use thiserror::Error;

use crate::scanner::scan;
use crate::schema::VariableSchema;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A schema entry whose description is still empty.
    #[error("variable '{0}' has no description")]
    MissingDescription(String),

    /// A placeholder in the template with no value supplied.
    #[error("missing value for variable '{0}'")]
    MissingValue(String),

    /// A supplied value whose name matches no placeholder in the template.
    #[error("unknown variable '{0}' provided")]
    UnknownVariable(String),
}

/// Reports every schema entry with an empty description.
///
/// One [`ValidationError::MissingDescription`] per offending entry, in
/// schema-iteration (name) order.
///
/// # Examples
///
/// ```
/// use promptdeck_engine::{check_schema, ValidationError, VariableSchema, VariableSchemaEntry};
///
/// let mut schema = VariableSchema::new();
/// schema.insert("a".into(), VariableSchemaEntry::new(""));
/// schema.insert("b".into(), VariableSchemaEntry::new("ok"));
///
/// assert_eq!(check_schema(&schema), [ValidationError::MissingDescription("a".into())]);
/// ```
pub fn check_schema(schema: &VariableSchema) -> Vec<ValidationError> {
    schema
        .iter()
        .filter(|(_, entry)| entry.description.is_empty())
        .map(|(name, _)| ValidationError::MissingDescription(name.clone()))
        .collect()
}

/// Checks a value map against the placeholders actually in `template`.
///
/// Reports a [`ValidationError::MissingValue`] for each placeholder with
/// no supplied value (first-occurrence order), then a
/// [`ValidationError::UnknownVariable`] for each supplied key that
/// matches no placeholder (name order). An empty result means
/// [`render`](crate::render) over the same inputs cannot fail.
pub fn check_values(
    template: &str,
    values: &BTreeMap<String, String>,
) -> Vec<ValidationError> {
    let placeholders = scan(template);

    let mut errors: Vec<ValidationError> = placeholders
        .iter()
        .filter(|name| !values.contains_key(*name))
        .map(|name| ValidationError::MissingValue(name.clone()))
        .collect();

    errors.extend(
        values
            .keys()
            .filter(|key| !placeholders.contains(key))
            .map(|key| ValidationError::UnknownVariable(key.clone())),
    );

    errors
}
