//! Placeholder scanning.
//!
//! Finds `{{name}}` placeholders in template text. A placeholder is two
//! literal opening braces, optional whitespace, one or more characters
//! from `[A-Za-z0-9_]`, optional whitespace, and two literal closing
//! braces. Anything else inside double braces (nested braces, disallowed
//! characters, unterminated braces) is not a placeholder and stays
//! literal text.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// The placeholder pattern. Whitespace around the name is allowed and
/// trimmed by the capture group, so `{{ name }}` and `{{name}}` name the
/// same variable.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("placeholder pattern compiles")
});

/// A single placeholder occurrence in a template.
///
/// `start..end` is the byte span of the whole token including both brace
/// pairs, so `&template[start..end]` is the text to replace when
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// The variable name, with surrounding whitespace trimmed.
    pub name: String,

    /// Byte offset of the first `{` of the token.
    pub start: usize,

    /// Byte offset one past the last `}` of the token.
    pub end: usize,
}

/// Returns every placeholder occurrence in `template`, left to right.
///
/// Unlike [`scan`], repeated variables appear once per occurrence. This
/// is the form the renderer consumes.
pub fn scan_occurrences(template: &str) -> Vec<Occurrence> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| {
            let token = caps.get(0).expect("whole match always present");
            Occurrence {
                name: caps[1].to_string(),
                start: token.start(),
                end: token.end(),
            }
        })
        .collect()
}

/// Returns the variable names in `template`, deduplicated, in order of
/// first appearance.
///
/// Malformed placeholder-like text never fails the scan; it simply does
/// not match. An empty template yields an empty list.
///
/// # Examples
///
/// ```
/// use promptdeck_engine::scan;
///
/// assert_eq!(scan("Hi {{name}}, you are {{ age }} years old"), ["name", "age"]);
/// assert_eq!(scan("{{bad-name}}"), Vec::<String>::new());
/// ```
pub fn scan(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for occurrence in scan_occurrences(template) {
        if seen.insert(occurrence.name.clone()) {
            names.push(occurrence.name);
        }
    }
    names
}
