//! Translation engine.
//!
//! An [`I18n`] handle owns the resource store, the active language and the
//! backend used to load namespaces lazily. Handles are plain values: create
//! as many as needed and pass them to whoever translates.

pub mod backend;
pub mod interpolate;
pub mod lookup;

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{COMMON_NAMESPACE, ResourceTable, Translations, deep_extend};
use crate::error::I18nError;

pub use backend::{Backend, FsBackend, NoBackend};
pub use lookup::TOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpolationOptions {
    /// HTML-escape substituted values.
    pub escape_value: bool,
}

impl Default for InterpolationOptions {
    fn default() -> Self {
        Self { escape_value: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    pub resources: ResourceTable,
    pub lng: String,
    pub fallback_lng: String,
    pub default_ns: String,
    pub ns: Vec<String>,
    pub debug: bool,
    /// When set, `change_language` rejects tokens outside this list.
    pub supported_lngs: Option<Vec<String>>,
    pub interpolation: InterpolationOptions,
    /// Make `change_language` fail if a namespace cannot be loaded.
    /// Otherwise the failure is logged and the switch goes ahead.
    pub wait_for_load: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            resources: ResourceTable::new(),
            lng: "en-US".to_string(),
            fallback_lng: "en-US".to_string(),
            default_ns: COMMON_NAMESPACE.to_string(),
            ns: vec![COMMON_NAMESPACE.to_string()],
            debug: false,
            supported_lngs: None,
            interpolation: InterpolationOptions::default(),
            wait_for_load: true,
        }
    }
}

/// Load lifecycle of one (language, namespace) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Ready,
    Failed,
}

pub struct I18n<B = NoBackend> {
    store: ResourceTable,
    options: EngineOptions,
    language: String,
    backend: B,
    load_states: HashMap<(String, String), LoadState>,
}

impl I18n<NoBackend> {
    pub fn new(options: EngineOptions) -> Self {
        Self::init(options, NoBackend)
    }
}

impl<B: Backend> I18n<B> {
    /// Take ownership of `options.resources` and start in `options.lng`.
    pub fn init(mut options: EngineOptions, backend: B) -> Self {
        let store = std::mem::take(&mut options.resources);
        let language = options.lng.clone();

        if options.debug {
            debug!(
                language = %language,
                fallback = %options.fallback_lng,
                default_ns = %options.default_ns,
                locales = ?store.locales().collect::<Vec<_>>(),
                "i18n initialized"
            );
        }

        Self {
            store,
            options,
            language,
            backend,
            load_states: HashMap::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn resources(&self) -> &ResourceTable {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Register a namespace bundle.
    ///
    /// `deep` merges recursively, honouring `overwrite` for existing leaves.
    /// Without `deep` the top-level keys of `data` replace existing ones.
    pub fn add_resource_bundle(
        &mut self,
        lng: &str,
        ns: &str,
        data: Translations,
        deep: bool,
        overwrite: bool,
    ) {
        let bundle = match self.store.namespace_mut(lng, ns) {
            Some(existing) => {
                if deep {
                    deep_extend(existing, &data, overwrite);
                } else {
                    existing.extend(data);
                }
                None
            }
            None => Some(data),
        };
        if let Some(bundle) = bundle {
            self.store.insert_namespace(lng, ns, bundle);
        }

        self.load_states
            .insert((lng.to_string(), ns.to_string()), LoadState::Ready);

        if self.options.debug {
            debug!(language = lng, namespace = ns, deep, overwrite, "resource bundle added");
        }
    }

    pub fn get_resource_bundle(&self, lng: &str, ns: &str) -> Option<&Translations> {
        self.store.namespace(lng, ns)
    }

    pub fn has_resource_bundle(&self, lng: &str, ns: &str) -> bool {
        self.store.namespace(lng, ns).is_some()
    }

    pub fn remove_resource_bundle(&mut self, lng: &str, ns: &str) -> Option<Translations> {
        self.load_states.remove(&(lng.to_string(), ns.to_string()));
        self.store.remove_namespace(lng, ns)
    }

    pub fn load_state(&self, lng: &str, ns: &str) -> LoadState {
        if self.has_resource_bundle(lng, ns) {
            return LoadState::Ready;
        }
        self.load_states
            .get(&(lng.to_string(), ns.to_string()))
            .copied()
            .unwrap_or(LoadState::NotLoaded)
    }

    /// Switch the active language.
    ///
    /// Every active namespace missing for the target or the fallback language
    /// is loaded through the backend first.
    pub async fn change_language(&mut self, lng: &str) -> Result<(), I18nError> {
        if let Some(supported) = &self.options.supported_lngs
            && !supported.iter().any(|s| s == lng)
        {
            return Err(I18nError::UnsupportedLanguage(lng.to_string()));
        }

        let mut languages = vec![lng.to_string()];
        if self.options.fallback_lng != lng {
            languages.push(self.options.fallback_lng.clone());
        }

        for language in &languages {
            for ns in self.options.ns.clone() {
                if matches!(self.load_state(language, &ns), LoadState::Ready) {
                    continue;
                }
                if let Err(err) = self.load_namespace(language, &ns).await {
                    if self.options.wait_for_load {
                        return Err(err);
                    }
                    warn!(error = %err, "continuing language change without namespace");
                }
            }
        }

        if self.options.debug {
            debug!(from = %self.language, to = lng, "language changed");
        }
        self.language = lng.to_string();
        Ok(())
    }

    async fn load_namespace(&mut self, lng: &str, ns: &str) -> Result<(), I18nError> {
        let pair = (lng.to_string(), ns.to_string());
        self.load_states.insert(pair.clone(), LoadState::Loading);

        match self.backend.read(lng, ns).await {
            Ok(Some(bundle)) => {
                if self.options.debug {
                    debug!(language = lng, namespace = ns, keys = bundle.len(), "namespace loaded");
                }
                self.add_resource_bundle(lng, ns, bundle, true, true);
                Ok(())
            }
            Ok(None) => {
                self.load_states.insert(pair, LoadState::Ready);
                Ok(())
            }
            Err(err) => {
                self.load_states.insert(pair, LoadState::Failed);
                Err(err)
            }
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &TOptions::default())
    }

    /// Resolve `key` (`"ns:path.to.key"` or `"path.to.key"`).
    ///
    /// Tries the requested or active language, then the fallback language.
    /// A miss yields `default_value` or the key itself.
    pub fn t_with(&self, key: &str, options: &TOptions) -> String {
        match self.resolve(key, options) {
            Some(template) => {
                let values = options.interpolation_values();
                let (rendered, missing) = interpolate::interpolate(
                    template,
                    &values,
                    self.options.interpolation.escape_value,
                );
                if self.options.debug {
                    for name in &missing {
                        warn!(key, variable = %name, "missing interpolation variable");
                    }
                }
                rendered.into_owned()
            }
            None => {
                if self.options.debug {
                    warn!(
                        key,
                        language = options.lng.as_deref().unwrap_or(&self.language),
                        "missing key"
                    );
                }
                options
                    .default_value
                    .clone()
                    .unwrap_or_else(|| key.to_string())
            }
        }
    }

    pub fn exists(&self, key: &str, options: &TOptions) -> bool {
        self.resolve(key, options).is_some()
    }

    fn resolve(&self, key: &str, options: &TOptions) -> Option<&str> {
        let (ns, path) = lookup::split_namespace(key);
        let ns = ns
            .or(options.ns.as_deref())
            .unwrap_or(&self.options.default_ns);
        let language = options.lng.as_deref().unwrap_or(&self.language);

        let mut languages = vec![language];
        if self.options.fallback_lng != language {
            languages.push(&self.options.fallback_lng);
        }

        let candidates = lookup::candidate_keys(path, options.count);
        languages.into_iter().find_map(|lng| {
            let tree = self.store.namespace(lng, ns)?;
            candidates
                .iter()
                .find_map(|candidate| lookup::get_path(tree, candidate).and_then(Value::as_str))
        })
    }
}
