//! Merging caller resources over the built-in dictionaries.
//!
//! The default [`MergeStrategy::ReplaceGroup`] is a one-level override: a
//! top-level group in the caller's `common` namespace (for example
//! `buttons`) replaces the built-in group wholesale. Overriding a single
//! button therefore drops every other built-in button unless the caller
//! supplies the full group. [`MergeStrategy::MergeKeys`] merges recursively
//! and keeps sibling defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{COMMON_NAMESPACE, ResourceTable, SupportedLanguage, Translations, default_common};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum MergeStrategy {
    /// A caller group replaces the built-in group entirely.
    #[default]
    ReplaceGroup,
    /// Caller leaves are merged into the built-in groups key by key.
    MergeKeys,
}

/// Merge a caller `common` namespace over a built-in one.
pub fn merge_common(
    defaults: &Translations,
    overrides: &Translations,
    strategy: MergeStrategy,
) -> Translations {
    let mut merged = defaults.clone();
    match strategy {
        MergeStrategy::ReplaceGroup => {
            for (group, value) in overrides {
                merged.insert(group.clone(), value.clone());
            }
        }
        MergeStrategy::MergeKeys => deep_extend(&mut merged, overrides, true),
    }
    merged
}

/// Recursively copy `source` into `target`.
///
/// Objects on both sides merge; any other collision keeps the target value
/// unless `overwrite` is set.
pub fn deep_extend(target: &mut Translations, source: &Translations, overwrite: bool) {
    for (key, value) in source {
        let Some(existing) = target.get_mut(key) else {
            target.insert(key.clone(), value.clone());
            continue;
        };
        match (existing, value) {
            (Value::Object(existing), Value::Object(incoming)) => {
                deep_extend(existing, incoming, overwrite);
            }
            (existing, _) if overwrite => *existing = value.clone(),
            _ => {}
        }
    }
}

/// Build the resource table handed to the engine.
///
/// 1. Each baseline language gets its built-in `common` merged with the
///    caller's `common` (if any) using `strategy`.
/// 2. The caller's other namespaces for that language pass through
///    untouched.
/// 3. Every other language is copied verbatim, with no defaults injected.
pub fn resolve_resources(resources: &ResourceTable, strategy: MergeStrategy) -> ResourceTable {
    let mut merged = ResourceTable::new();

    for language in SupportedLanguage::ALL {
        let mut namespaces = resources
            .locale(language.as_str())
            .cloned()
            .unwrap_or_default();

        let empty = Translations::new();
        let overrides = namespaces.get(COMMON_NAMESPACE).unwrap_or(&empty);
        let common = merge_common(default_common(language), overrides, strategy);
        namespaces.insert(COMMON_NAMESPACE.to_string(), common);

        merged.insert_locale(language.as_str(), namespaces);
    }

    for (locale, namespaces) in resources.iter() {
        if !merged.contains_locale(locale) {
            merged.insert_locale(locale.clone(), namespaces.clone());
        }
    }

    merged
}
