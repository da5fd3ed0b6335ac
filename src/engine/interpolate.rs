use std::{borrow::Cow, collections::BTreeMap, sync::LazyLock};

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^{}]+?)\s*\}\}").expect("placeholder regex is valid"));

/// Substitute `{{ name }}` placeholders.
///
/// Unknown names become the empty string and are returned in the second
/// element so the caller can report them.
pub fn interpolate<'a>(
    template: &'a str,
    values: &BTreeMap<String, String>,
    escape_value: bool,
) -> (Cow<'a, str>, Vec<String>) {
    let mut missing = Vec::new();
    let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures| {
        let name = &caps[1];
        match values.get(name) {
            Some(value) if escape_value => escape_html(value),
            Some(value) => value.clone(),
            None => {
                missing.push(name.to_string());
                String::new()
            }
        }
    });
    (rendered, missing)
}

/// Escape a value for HTML output.
pub fn escape_html(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}
