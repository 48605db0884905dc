//! Variable schema types and reconciliation.
//!
//! A [`VariableSchema`] maps variable names to their declared type and
//! description. The template text is the source of truth for which
//! variables exist: [`reconcile`] brings a schema in line with the
//! placeholders currently present, adding blank entries for new names and
//! dropping entries whose placeholder disappeared.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Declared type of a template variable.
///
/// Only strings are supported; every substitution is textual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    /// A plain string value, inserted verbatim at render time.
    #[default]
    String,
}

/// Schema entry for one template variable.
///
/// Serializes as `{"type": "string", "description": "..."}`, the shape
/// stored alongside each prompt record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSchemaEntry {
    /// Declared value type.
    #[serde(rename = "type", default)]
    pub kind: VariableType,

    /// Human-written explanation of what the variable is for. Empty until
    /// the user fills it in; [`check_schema`](crate::check_schema) reports
    /// entries still missing one.
    #[serde(default)]
    pub description: String,
}

impl VariableSchemaEntry {
    /// Creates a string-typed entry with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            kind: VariableType::String,
            description: description.into(),
        }
    }
}

/// Mapping from variable name to its schema entry.
///
/// Map-key uniqueness guarantees no duplicate names; the ordered map
/// gives validation a deterministic iteration order.
pub type VariableSchema = BTreeMap<String, VariableSchemaEntry>;

/// Reconciles a schema with the placeholders currently in the template.
///
/// For every name in `placeholders` not in `prior`, a new entry is
/// inserted with type `string` and an empty description — the caller (UI)
/// is responsible for prompting for a real one. Entries in `prior` whose
/// name no longer appears are dropped. Entries present on both sides are
/// carried over unmodified, so user-entered descriptions survive edits.
///
/// Pure and idempotent: reconciling twice with the same inputs yields the
/// same schema.
///
/// # Examples
///
/// ```
/// use promptdeck_engine::{reconcile, VariableSchema, VariableSchemaEntry};
///
/// let mut prior = VariableSchema::new();
/// prior.insert("old".into(), VariableSchemaEntry::new("kept as-is"));
/// prior.insert("stale".into(), VariableSchemaEntry::new("dropped"));
///
/// let next = reconcile(&["old".into(), "new".into()], &prior);
/// assert_eq!(next["old"].description, "kept as-is");
/// assert_eq!(next["new"].description, "");
/// assert!(!next.contains_key("stale"));
/// ```
pub fn reconcile(placeholders: &[String], prior: &VariableSchema) -> VariableSchema {
    let mut next = VariableSchema::new();
    for name in placeholders {
        let entry = prior.get(name).cloned().unwrap_or_default();
        next.insert(name.clone(), entry);
    }

    let added = next.keys().filter(|name| !prior.contains_key(*name)).count();
    let dropped = prior.keys().filter(|name| !next.contains_key(*name)).count();
    if added > 0 || dropped > 0 {
        debug!(added, dropped, "schema reconciled");
    }

    next
}
