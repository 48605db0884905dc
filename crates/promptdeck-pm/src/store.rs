//! In-memory prompt store.
//!
//! [`PromptStore`] owns a collection of [`Prompt`] records and keeps each
//! record's `variables_schema` reconciled with its template text: every
//! create or template edit re-derives the schema from the placeholders,
//! preserving descriptions for variables that survive the edit.
//!
//! The store is a plain single-writer structure. Callers that share it
//! across threads wrap it themselves; guaranteeing at most one writer per
//! record is their job, not the store's.

use std::collections::{BTreeMap, HashMap};

use promptdeck_engine::{
    ValidationError, VariableSchema, check_schema, check_values, reconcile, scan,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Prompt, PromptDraft, StoreError};

/// Values supplied for one render call.
///
/// The field is named `variable_values` on the wire, matching the render
/// endpoint this store mirrors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Variable name to value. Every placeholder in the template must be
    /// covered, and no extra names may be supplied.
    pub variable_values: BTreeMap<String, String>,
}

/// Response body of a successful store-level render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutcome {
    /// Id of the rendered prompt.
    pub prompt_id: u64,

    /// Title of the rendered prompt.
    pub title: String,

    /// The template text before substitution.
    pub original_template: String,

    /// The template with every placeholder replaced.
    pub rendered_text: String,

    /// Placeholder names found in the template, first-occurrence order.
    pub variables_used: Vec<String>,
}

/// Filter criteria for [`PromptStore::list`].
#[derive(Debug, Clone, Default)]
pub struct PromptFilter {
    /// Keep only prompts whose favorite flag matches.
    pub favorite: Option<bool>,

    /// Keep only prompts whose title or template text contains this
    /// string, case-insensitively.
    pub search: Option<String>,
}

/// Manages prompt records in memory.
///
/// # Examples
///
/// ```
/// use promptdeck_pm::{PromptDraft, PromptStore, RenderRequest};
///
/// let mut store = PromptStore::new();
/// let id = store.create(PromptDraft::new("Greeting", "Hello, {{name}}!")).id;
///
/// let request = RenderRequest {
///     variable_values: [("name".to_string(), "World".to_string())].into(),
/// };
/// let outcome = store.render(id, &request).unwrap();
/// assert_eq!(outcome.rendered_text, "Hello, World!");
/// ```
#[derive(Clone)]
pub struct PromptStore {
    prompts: HashMap<u64, Prompt>,
    next_id: u64,
}

impl PromptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            prompts: HashMap::new(),
            next_id: 1,
        }
    }

    /// Creates a prompt from a draft, assigning the next id.
    ///
    /// The schema is reconciled against the template text immediately, so
    /// it covers exactly the detected placeholders from birth. Draft
    /// schema entries for variables the template uses are kept with their
    /// descriptions; the rest are dropped.
    pub fn create(&mut self, draft: PromptDraft) -> &Prompt {
        let id = self.next_id;
        self.next_id += 1;

        let prior = draft.variables_schema.unwrap_or_default();
        let schema = reconcile(&scan(&draft.description), &prior);
        let now = chrono::Utc::now();

        debug!(id, title = %draft.title, variables = schema.len(), "prompt created");

        self.prompts
            .entry(id)
            .or_insert(Prompt {
                id,
                title: draft.title,
                description: draft.description,
                variables_schema: schema,
                favorite: draft.favorite,
                created_at: now,
                updated_at: now,
            })
    }

    /// Returns the prompt with the given id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PromptNotFound` if no such prompt exists.
    pub fn get(&self, id: u64) -> Result<&Prompt, StoreError> {
        self.prompts.get(&id).ok_or(StoreError::PromptNotFound(id))
    }

    /// Replaces a prompt's editable fields from a draft.
    ///
    /// When the template text changed, the schema is reconciled against
    /// the new placeholders: entries for surviving variables keep their
    /// descriptions, new placeholders get blank entries, and entries for
    /// vanished placeholders are dropped. A draft schema, if present,
    /// takes the place of the stored one before reconciliation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PromptNotFound` if no such prompt exists.
    pub fn update(&mut self, id: u64, draft: PromptDraft) -> Result<&Prompt, StoreError> {
        let prompt = self
            .prompts
            .get_mut(&id)
            .ok_or(StoreError::PromptNotFound(id))?;

        let prior = draft
            .variables_schema
            .unwrap_or_else(|| prompt.variables_schema.clone());

        prompt.title = draft.title;
        prompt.description = draft.description;
        prompt.favorite = draft.favorite;
        prompt.variables_schema = reconcile(&scan(&prompt.description), &prior);
        prompt.updated_at = chrono::Utc::now();

        debug!(id, variables = prompt.variables_schema.len(), "prompt updated");
        Ok(prompt)
    }

    /// Removes and returns the prompt with the given id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PromptNotFound` if no such prompt exists.
    pub fn delete(&mut self, id: u64) -> Result<Prompt, StoreError> {
        let prompt = self
            .prompts
            .remove(&id)
            .ok_or(StoreError::PromptNotFound(id))?;
        debug!(id, "prompt deleted");
        Ok(prompt)
    }

    /// Flips the favorite flag and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PromptNotFound` if no such prompt exists.
    pub fn toggle_favorite(&mut self, id: u64) -> Result<bool, StoreError> {
        let prompt = self
            .prompts
            .get_mut(&id)
            .ok_or(StoreError::PromptNotFound(id))?;
        prompt.favorite = !prompt.favorite;
        prompt.updated_at = chrono::Utc::now();
        Ok(prompt.favorite)
    }

    /// Lists prompts matching the filter, newest first.
    ///
    /// Ordering is by creation time descending, with id descending as the
    /// tiebreak for prompts created in the same instant.
    pub fn list(&self, filter: &PromptFilter) -> Vec<&Prompt> {
        let needle = filter.search.as_deref().map(str::to_lowercase);

        let mut matches: Vec<&Prompt> = self
            .prompts
            .values()
            .filter(|p| filter.favorite.is_none_or(|want| p.favorite == want))
            .filter(|p| {
                needle.as_deref().is_none_or(|needle| {
                    p.title.to_lowercase().contains(needle)
                        || p.description.to_lowercase().contains(needle)
                })
            })
            .collect();

        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        matches
    }

    /// Sets the description of one schema variable.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PromptNotFound` if no such prompt exists, or
    /// `StoreError::UnknownVariable` if the name is not in the schema —
    /// schema entries exist only for placeholders present in the template.
    pub fn set_variable_description(
        &mut self,
        id: u64,
        name: &str,
        description: impl Into<String>,
    ) -> Result<(), StoreError> {
        let prompt = self
            .prompts
            .get_mut(&id)
            .ok_or(StoreError::PromptNotFound(id))?;
        let entry = prompt
            .variables_schema
            .get_mut(name)
            .ok_or_else(|| StoreError::UnknownVariable(name.to_string()))?;
        entry.description = description.into();
        prompt.updated_at = chrono::Utc::now();
        Ok(())
    }

    /// Reports schema-completeness findings for a prompt.
    ///
    /// An empty result means every variable has a description. The store
    /// never blocks create or update on these findings; callers gate the
    /// operations they care about (e.g. publishing a finished template).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PromptNotFound` if no such prompt exists.
    pub fn validate(&self, id: u64) -> Result<Vec<ValidationError>, StoreError> {
        Ok(check_schema(&self.get(id)?.variables_schema))
    }

    /// Renders a prompt with the supplied values, strictly.
    ///
    /// The value map must cover the template's placeholders exactly:
    /// missing values and unknown extra names both reject the request
    /// before any substitution happens.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PromptNotFound` if no such prompt exists, or
    /// `StoreError::InvalidRender` carrying every coverage finding.
    pub fn render(&self, id: u64, request: &RenderRequest) -> Result<RenderOutcome, StoreError> {
        let prompt = self.get(id)?;

        let findings = check_values(&prompt.description, &request.variable_values);
        if !findings.is_empty() {
            return Err(StoreError::InvalidRender(findings));
        }

        let result = prompt.render(&request.variable_values)?;
        Ok(RenderOutcome {
            prompt_id: prompt.id,
            title: prompt.title.clone(),
            original_template: prompt.description.clone(),
            rendered_text: result.rendered_text,
            variables_used: result.variables_used,
        })
    }

    /// Returns schema entries for every placeholder currently detected in
    /// the template, defaulting to a blank string entry for any name the
    /// stored schema does not cover.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PromptNotFound` if no such prompt exists.
    pub fn variables(&self, id: u64) -> Result<VariableSchema, StoreError> {
        let prompt = self.get(id)?;
        let mut out = VariableSchema::new();
        for name in prompt.detected_variables() {
            let entry = prompt
                .variables_schema
                .get(&name)
                .cloned()
                .unwrap_or_default();
            out.insert(name, entry);
        }
        Ok(out)
    }

    /// Number of prompts in the store.
    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }
}

impl Default for PromptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PromptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptStore")
            .field("prompt_count", &self.prompts.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
