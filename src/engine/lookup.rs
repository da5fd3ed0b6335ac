use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::Translations;

pub const NS_SEPARATOR: char = ':';
pub const KEY_SEPARATOR: char = '.';
pub const PLURAL_SUFFIX: &str = "_plural";

/// Per-call lookup options for [`super::I18n::t_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TOptions {
    /// Namespace to use when the key has no `ns:` prefix.
    pub ns: Option<String>,
    /// Language to resolve in instead of the active one.
    pub lng: Option<String>,
    /// Selects the `_plural` variant when not 1; also exposed as `{{count}}`.
    pub count: Option<i64>,
    pub values: BTreeMap<String, String>,
    pub default_value: Option<String>,
}

impl TOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ns(mut self, ns: impl Into<String>) -> Self {
        self.ns = Some(ns.into());
        self
    }

    pub fn lng(mut self, lng: impl Into<String>) -> Self {
        self.lng = Some(lng.into());
        self
    }

    pub fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Interpolation variables including `count` when set.
    pub(crate) fn interpolation_values(&self) -> BTreeMap<String, String> {
        let mut values = self.values.clone();
        if let Some(count) = self.count {
            values
                .entry("count".to_string())
                .or_insert_with(|| count.to_string());
        }
        values
    }
}

/// Split `"auth:login.title"` into `(Some("auth"), "login.title")`.
pub fn split_namespace(key: &str) -> (Option<&str>, &str) {
    match key.split_once(NS_SEPARATOR) {
        Some((ns, rest)) if !ns.is_empty() => (Some(ns), rest),
        _ => (None, key),
    }
}

/// Keys to try, most specific first.
pub fn candidate_keys(key: &str, count: Option<i64>) -> Vec<String> {
    match count {
        Some(n) if n != 1 => vec![format!("{}{}", key, PLURAL_SUFFIX), key.to_string()],
        _ => vec![key.to_string()],
    }
}

/// Walk a dotted path through a translation tree.
pub fn get_path<'a>(tree: &'a Translations, path: &str) -> Option<&'a Value> {
    let mut parts = path.split(KEY_SEPARATOR);
    let mut current = tree.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}
