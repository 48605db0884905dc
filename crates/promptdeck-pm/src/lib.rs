//! Promptdeck Prompt Manager
//!
//! An in-memory prompt manager over the promptdeck template engine.
//! Prompts are titled templates with a variable schema that the store
//! keeps reconciled with the template text on every edit. Supports
//! create/read/update/delete, favorite toggling, filtered and searched
//! listing, strict rendering, and loading `.prompt` files from a
//! directory.
//!
//! Storage is purely in memory; persistence, transport, and access
//! control are the embedding application's concern.
//!
//! # Usage
//!
//! ```
//! use promptdeck_pm::{PromptDraft, PromptStore, RenderRequest};
//!
//! let mut store = PromptStore::new();
//! let id = store.create(PromptDraft::new("Writer", "Write a {{type}} about {{topic}}.")).id;
//!
//! let request = RenderRequest {
//!     variable_values: [
//!         ("type".to_string(), "poem".to_string()),
//!         ("topic".to_string(), "autumn".to_string()),
//!     ]
//!     .into(),
//! };
//! let outcome = store.render(id, &request).unwrap();
//! assert_eq!(outcome.rendered_text, "Write a poem about autumn.");
//! ```

mod error;
pub mod loader;
mod prompt;
mod store;

pub use error::StoreError;
pub use loader::load_prompts_from_dir;
pub use prompt::{Prompt, PromptDraft};
pub use store::{PromptFilter, PromptStore, RenderOutcome, RenderRequest};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_run_full_edit_and_render_cycle() {
        let mut store = PromptStore::new();
        let id = store
            .create(PromptDraft::new("Greeting", "Hello {{name}}!"))
            .id;
        store
            .set_variable_description(id, "name", "who to greet")
            .unwrap();
        assert!(store.validate(id).unwrap().is_empty());

        // Editing the template reshapes the schema but keeps what survives.
        store
            .update(id, PromptDraft::new("Greeting", "Hello {{name}} from {{city}}!"))
            .unwrap();
        let prompt = store.get(id).unwrap();
        assert_eq!(prompt.variables_schema["name"].description, "who to greet");
        assert_eq!(prompt.variables_schema["city"].description, "");

        let request = RenderRequest {
            variable_values: [
                ("name".to_string(), "Ada".to_string()),
                ("city".to_string(), "London".to_string()),
            ]
            .into(),
        };
        let outcome = store.render(id, &request).unwrap();
        assert_eq!(outcome.rendered_text, "Hello Ada from London!");
        assert_eq!(outcome.variables_used, ["name", "city"]);
    }

    #[test]
    fn test_should_serialize_render_request_with_variable_values_key() {
        let request = RenderRequest {
            variable_values: [("a".to_string(), "1".to_string())].into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"variable_values": {"a": "1"}}));
    }
}
