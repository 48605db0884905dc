//! Promptdeck Template Engine
//!
//! The pure core of promptdeck: scanning template text for `{{name}}`
//! placeholders, reconciling a variable schema with the placeholders
//! currently present, substituting supplied values to produce rendered
//! text, and reporting validation findings.
//!
//! Every operation is a pure synchronous function over its inputs — no
//! I/O, no shared state, no hidden counters — so independent callers may
//! invoke them concurrently without coordination. Where the schema is
//! stored, and who is allowed to write it, is the caller's concern.
//!
//! # Usage
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use promptdeck_engine::{reconcile, render, scan, VariableSchema};
//!
//! let template = "Write a {{type}} about {{topic}}.";
//!
//! // The template is the source of truth for which variables exist.
//! let schema = reconcile(&scan(template), &VariableSchema::new());
//! assert!(schema.contains_key("type") && schema.contains_key("topic"));
//!
//! let values = BTreeMap::from([
//!     ("type".to_string(), "poem".to_string()),
//!     ("topic".to_string(), "autumn".to_string()),
//! ]);
//! let result = render(template, &values).unwrap();
//! assert_eq!(result.rendered_text, "Write a poem about autumn.");
//! ```

mod error;
mod render;
mod scanner;
mod schema;
mod validate;

pub use error::EngineError;
pub use render::{RenderResult, render};
pub use scanner::{Occurrence, scan, scan_occurrences};
pub use schema::{VariableSchema, VariableSchemaEntry, VariableType, reconcile};
pub use validate::{ValidationError, check_schema, check_values};

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_should_keep_schema_stable_across_repeated_reconciles() {
        let template = "Dear {{name}}, your {{item}} has shipped.";
        let mut schema = VariableSchema::new();
        schema.insert("name".into(), VariableSchemaEntry::new("recipient"));

        let once = reconcile(&scan(template), &schema);
        let twice = reconcile(&scan(template), &once);
        assert_eq!(once, twice);
        assert_eq!(once["name"].description, "recipient");
        assert_eq!(once["item"].description, "");
    }

    #[test]
    fn test_should_leave_no_unsubstituted_placeholders_after_render() {
        let template = "{{a}} {{b}} {{a}}";
        let values = BTreeMap::from([
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]);

        let result = render(template, &values).unwrap();
        assert_eq!(result.variables_used, scan(template));
        assert!(scan(&result.rendered_text).is_empty());
    }

    #[test]
    fn test_should_agree_between_check_values_and_render() {
        let template = "{{present}} {{absent}}";
        let values = BTreeMap::from([("present".to_string(), "x".to_string())]);

        let findings = check_values(template, &values);
        assert!(!findings.is_empty());
        assert!(render(template, &values).is_err());
    }
}
