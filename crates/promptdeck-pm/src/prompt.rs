//! Prompt record types.
//!
//! Contains [`Prompt`], the record the store manages, and [`PromptDraft`],
//! the caller-supplied fields for create and update operations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use promptdeck_engine::{EngineError, RenderResult, VariableSchema, render, scan};
use serde::{Deserialize, Serialize};

/// A stored prompt: a titled template with its variable schema.
///
/// The `description` field holds the template text itself (the raw prompt
/// with `{{name}}` placeholders). `variables_schema` is kept in line with
/// the placeholders by the store, which reconciles it on every edit of
/// the description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    /// Store-assigned identifier.
    pub id: u64,

    /// Display title.
    pub title: String,

    /// The template text, containing zero or more `{{name}}` placeholders.
    pub description: String,

    /// Schema for the variables used in the template.
    pub variables_schema: VariableSchema,

    /// Whether the owner marked this prompt as a favorite.
    pub favorite: bool,

    /// When the prompt was created.
    pub created_at: DateTime<Utc>,

    /// When the prompt was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Prompt {
    /// Returns the variable names currently detected in the template,
    /// deduplicated, in order of first appearance.
    pub fn detected_variables(&self) -> Vec<String> {
        scan(&self.description)
    }

    /// Renders the template with the given values.
    ///
    /// Extra values are ignored at this level; the store's
    /// [`render`](crate::PromptStore::render) applies the strict policy.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::MissingValue` if a placeholder has no value.
    pub fn render(&self, values: &BTreeMap<String, String>) -> Result<RenderResult, EngineError> {
        render(&self.description, values)
    }
}

/// Caller-supplied fields for creating or updating a prompt.
///
/// An optional schema may carry pre-written descriptions; the store
/// reconciles it against the template text, so entries for variables the
/// template does not use are dropped on the way in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptDraft {
    /// Display title.
    pub title: String,

    /// The template text.
    pub description: String,

    /// Optional starting schema.
    #[serde(default)]
    pub variables_schema: Option<VariableSchema>,

    /// Favorite flag, off by default.
    #[serde(default)]
    pub favorite: bool,
}

impl PromptDraft {
    /// Creates a draft with the given title and template text.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variables_schema: None,
            favorite: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Prompt {
        Prompt {
            id: 1,
            title: "Greeting".into(),
            description: "Hello {{name}}, welcome to {{place}}!".into(),
            variables_schema: VariableSchema::new(),
            favorite: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_should_detect_variables_from_description() {
        assert_eq!(sample().detected_variables(), ["name", "place"]);
    }

    #[test]
    fn test_should_render_with_full_values() {
        let values = BTreeMap::from([
            ("name".to_string(), "Ada".to_string()),
            ("place".to_string(), "the deck".to_string()),
        ]);
        let result = sample().render(&values).unwrap();
        assert_eq!(result.rendered_text, "Hello Ada, welcome to the deck!");
    }

    #[test]
    fn test_should_roundtrip_through_json() {
        let prompt = sample();
        let json = serde_json::to_string(&prompt).unwrap();
        let back: Prompt = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, prompt.title);
        assert_eq!(back.description, prompt.description);
        assert_eq!(back.variables_schema, prompt.variables_schema);
    }

    #[test]
    fn test_should_default_draft_extras() {
        let draft: PromptDraft =
            serde_json::from_str(r#"{"title": "T", "description": "D"}"#).unwrap();
        assert!(!draft.favorite);
        assert!(draft.variables_schema.is_none());
    }
}
