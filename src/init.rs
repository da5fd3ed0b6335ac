//! Merge-then-initialize entry points.

use serde::{Deserialize, Serialize};

use crate::core::{COMMON_NAMESPACE, MergeStrategy, ResourceTable, Translations, resolve_resources};
use crate::engine::{Backend, EngineOptions, I18n, InterpolationOptions, NoBackend};
use crate::error::I18nError;

fn default_language() -> String {
    "pt-BR".to_string()
}

fn default_ns() -> String {
    COMMON_NAMESPACE.to_string()
}

fn default_namespaces() -> Vec<String> {
    vec![COMMON_NAMESPACE.to_string()]
}

/// Caller configuration consumed by [`init_i18n`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nOptions {
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_language")]
    pub fallback_language: String,
    #[serde(default)]
    pub debug: bool,
    /// Caller translations by language and namespace.
    #[serde(default)]
    pub resources: ResourceTable,
    #[serde(default = "default_ns", rename = "defaultNS")]
    pub default_ns: String,
    #[serde(default = "default_namespaces")]
    pub ns: Vec<String>,
    #[serde(default)]
    pub merge_strategy: MergeStrategy,
}

impl Default for I18nOptions {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            fallback_language: default_language(),
            debug: false,
            resources: ResourceTable::new(),
            default_ns: default_ns(),
            ns: default_namespaces(),
            merge_strategy: MergeStrategy::default(),
        }
    }
}

impl I18nOptions {
    pub fn with_resources(resources: ResourceTable) -> Self {
        Self {
            resources,
            ..Default::default()
        }
    }

    /// Engine options for the merged table.
    ///
    /// Escaping is off: rendering layers escape output themselves.
    pub fn into_engine_options(self) -> EngineOptions {
        EngineOptions {
            resources: resolve_resources(&self.resources, self.merge_strategy),
            lng: self.default_language,
            fallback_lng: self.fallback_language,
            default_ns: self.default_ns,
            ns: self.ns,
            debug: self.debug,
            supported_lngs: None,
            interpolation: InterpolationOptions {
                escape_value: false,
            },
            wait_for_load: true,
        }
    }
}

/// Merge `options.resources` over the built-in dictionaries and return a
/// fresh engine handle.
pub fn init_i18n(options: I18nOptions) -> I18n {
    init_i18n_with_backend(options, NoBackend)
}

/// Like [`init_i18n`], loading namespaces missing at language switch time
/// through `backend`.
pub fn init_i18n_with_backend<B: Backend>(options: I18nOptions, backend: B) -> I18n<B> {
    I18n::init(options.into_engine_options(), backend)
}

impl<B: Backend> I18n<B> {
    /// Add or extend a namespace for a language. Leaves in `translations` win.
    pub fn add_namespace(
        &mut self,
        language: impl AsRef<str>,
        namespace: &str,
        translations: Translations,
    ) {
        self.add_resource_bundle(language.as_ref(), namespace, translations, true, true);
    }

    /// Alias of [`I18n::add_namespace`].
    pub fn add_translations(
        &mut self,
        language: impl AsRef<str>,
        namespace: &str,
        translations: Translations,
    ) {
        self.add_namespace(language, namespace, translations);
    }

    pub fn current_language(&self) -> &str {
        self.language()
    }

    /// [`I18n::change_language`] accepting a [`crate::SupportedLanguage`] or any token.
    pub async fn switch_language(&mut self, language: impl AsRef<str>) -> Result<(), I18nError> {
        self.change_language(language.as_ref()).await
    }
}
