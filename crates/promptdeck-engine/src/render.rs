//! Template rendering.
//!
//! Substitutes concrete values for every placeholder in a template in a
//! single left-to-right pass. Substitution is textual only: values are
//! inserted verbatim, never escaped, and never re-scanned for further
//! placeholders, so a value containing `{{...}}` cannot trigger another
//! round of substitution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::EngineError;
use crate::scanner::scan_occurrences;

/// Outcome of a successful render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    /// The template with every placeholder replaced by its value.
    pub rendered_text: String,

    /// Names of the placeholders found in the template, deduplicated, in
    /// order of first appearance.
    pub variables_used: Vec<String>,
}

/// Renders `template` by replacing each placeholder with its value.
///
/// Literal text outside placeholders is copied unchanged. Keys in
/// `values` that match no placeholder are ignored; strict rejection of
/// extras is the caller's job via [`check_values`](crate::check_values).
///
/// Deterministic: identical inputs always produce an identical result.
///
/// # Errors
///
/// Fails fast with [`EngineError::MissingValue`] at the first recognized
/// placeholder that has no entry in `values`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use promptdeck_engine::render;
///
/// let values = BTreeMap::from([
///     ("type".to_string(), "poem".to_string()),
///     ("topic".to_string(), "autumn".to_string()),
/// ]);
/// let result = render("Write a {{type}} about {{topic}}.", &values).unwrap();
/// assert_eq!(result.rendered_text, "Write a poem about autumn.");
/// assert_eq!(result.variables_used, ["type", "topic"]);
/// ```
pub fn render(
    template: &str,
    values: &BTreeMap<String, String>,
) -> Result<RenderResult, EngineError> {
    let mut rendered = String::with_capacity(template.len());
    let mut used: Vec<String> = Vec::new();
    let mut tail = 0;

    for occurrence in scan_occurrences(template) {
        let Some(value) = values.get(&occurrence.name) else {
            return Err(EngineError::MissingValue(occurrence.name));
        };
        rendered.push_str(&template[tail..occurrence.start]);
        rendered.push_str(value);
        tail = occurrence.end;

        if !used.contains(&occurrence.name) {
            used.push(occurrence.name);
        }
    }
    rendered.push_str(&template[tail..]);

    Ok(RenderResult {
        rendered_text: rendered,
        variables_used: used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_should_substitute_all_placeholders() {
        let result = render(
            "Write a {{type}} about {{topic}}.",
            &values(&[("type", "poem"), ("topic", "autumn")]),
        )
        .unwrap();
        assert_eq!(result.rendered_text, "Write a poem about autumn.");
        assert_eq!(result.variables_used, ["type", "topic"]);
    }

    #[test]
    fn test_should_pass_through_template_without_placeholders() {
        let result = render("plain text", &BTreeMap::new()).unwrap();
        assert_eq!(result.rendered_text, "plain text");
        assert!(result.variables_used.is_empty());
    }

    #[test]
    fn test_should_replace_every_occurrence_of_repeated_variable() {
        let result = render("{{x}} and {{x}} again", &values(&[("x", "y")])).unwrap();
        assert_eq!(result.rendered_text, "y and y again");
        assert_eq!(result.variables_used, ["x"]);
    }

    #[test]
    fn test_should_fail_fast_on_missing_value() {
        let err = render("{{a}} {{b}}", &values(&[("a", "1")])).unwrap_err();
        assert!(matches!(err, EngineError::MissingValue(name) if name == "b"));
    }

    #[test]
    fn test_should_ignore_extra_values() {
        let result = render("{{a}}", &values(&[("a", "1"), ("unused", "2")])).unwrap();
        assert_eq!(result.rendered_text, "1");
        assert_eq!(result.variables_used, ["a"]);
    }

    #[test]
    fn test_should_insert_values_verbatim_without_rescanning() {
        // A value that looks like a placeholder stays literal text.
        let result = render("{{a}}", &values(&[("a", "{{b}}")])).unwrap();
        assert_eq!(result.rendered_text, "{{b}}");
        assert_eq!(result.variables_used, ["a"]);
    }

    #[test]
    fn test_should_leave_malformed_placeholders_as_literal_text() {
        let result = render("{{bad-name}} {{ok}}", &values(&[("ok", "v")])).unwrap();
        assert_eq!(result.rendered_text, "{{bad-name}} v");
        assert_eq!(result.variables_used, ["ok"]);
    }

    #[test]
    fn test_should_substitute_whitespace_padded_placeholders() {
        let result = render("Hello {{ name }}!", &values(&[("name", "World")])).unwrap();
        assert_eq!(result.rendered_text, "Hello World!");
    }

    #[test]
    fn test_should_leave_no_placeholders_after_full_render() {
        let template = "A {{b}} C {{d}} E {{b}}";
        let result = render(template, &values(&[("b", "B"), ("d", "D")])).unwrap();
        assert!(scan(&result.rendered_text).is_empty());
    }
}
