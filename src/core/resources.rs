use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use walkdir::WalkDir;

/// A namespace's translation tree: string leaves, object branches.
pub type Translations = Map<String, Value>;

/// Namespace name -> translation tree, for one locale.
pub type LocaleResources = BTreeMap<String, Translations>;

/// Locale -> namespace -> translation tree.
///
/// Serializes as the plain nested JSON object
/// `{ "pt-BR": { "common": { ... } } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceTable(BTreeMap<String, LocaleResources>);

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(&self, locale: &str) -> Option<&LocaleResources> {
        self.0.get(locale)
    }

    pub fn locale_mut(&mut self, locale: &str) -> Option<&mut LocaleResources> {
        self.0.get_mut(locale)
    }

    pub fn namespace(&self, locale: &str, namespace: &str) -> Option<&Translations> {
        self.0.get(locale).and_then(|ns| ns.get(namespace))
    }

    pub fn namespace_mut(&mut self, locale: &str, namespace: &str) -> Option<&mut Translations> {
        self.0.get_mut(locale).and_then(|ns| ns.get_mut(namespace))
    }

    /// Insert a namespace tree, replacing any existing one.
    pub fn insert_namespace(
        &mut self,
        locale: impl Into<String>,
        namespace: impl Into<String>,
        translations: Translations,
    ) -> Option<Translations> {
        self.0
            .entry(locale.into())
            .or_default()
            .insert(namespace.into(), translations)
    }

    pub fn remove_namespace(&mut self, locale: &str, namespace: &str) -> Option<Translations> {
        let namespaces = self.0.get_mut(locale)?;
        let removed = namespaces.remove(namespace);
        if namespaces.is_empty() {
            self.0.remove(locale);
        }
        removed
    }

    pub fn insert_locale(
        &mut self,
        locale: impl Into<String>,
        resources: LocaleResources,
    ) -> Option<LocaleResources> {
        self.0.insert(locale.into(), resources)
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.0.contains_key(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LocaleResources)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, LocaleResources)> for ResourceTable {
    fn from_iter<I: IntoIterator<Item = (String, LocaleResources)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ResourceTable {
    type Item = (String, LocaleResources);
    type IntoIter = std::collections::btree_map::IntoIter<String, LocaleResources>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A resource file that could not be loaded. Scanning continues past it.
#[derive(Debug, Clone)]
pub struct ResourceScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanResourcesResult {
    pub resources: ResourceTable,
    pub warnings: Vec<ResourceScanWarning>,
    /// Number of namespace files successfully read.
    pub files_loaded: usize,
}

/// Parse one namespace file. The root must be a JSON object.
pub fn parse_namespace_file(path: &Path) -> Result<Translations> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    match json {
        Value::Object(map) => Ok(map),
        _ => bail!("Root of namespace file must be an object: {:?}", path),
    }
}

/// Splits `<root>/<locale>/<ns...>.json` into `(locale, namespace)`.
///
/// Examples:
/// - "pt-BR/common.json" -> Some(("pt-BR", "common"))
/// - "en-US/admin/users.json" -> Some(("en-US", "admin/users"))
/// - "common.json" -> None (no locale directory)
pub fn locale_and_namespace(relative: &Path) -> Option<(String, String)> {
    let mut components = relative
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .map(str::to_string)
        .collect::<Vec<_>>();

    if components.len() < 2 {
        return None;
    }

    let locale = components.remove(0);
    let file = components.pop()?;
    let stem = file.strip_suffix(".json")?;
    components.push(stem.to_string());

    Some((locale, components.join("/")))
}

/// Read every namespace file under `root`.
///
/// Unreadable or malformed files become warnings; a missing root is an error.
pub fn scan_resources(root: impl AsRef<Path>) -> Result<ScanResourcesResult> {
    let root = root.as_ref();
    let mut result = ScanResourcesResult::default();

    if !root.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .i18nrc.json 'messagesRoot' setting.",
            root.display()
        );
    }

    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(2)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    files.sort();

    for path in files {
        let Some((locale, namespace)) = path
            .strip_prefix(root)
            .ok()
            .and_then(locale_and_namespace)
        else {
            continue;
        };

        match parse_namespace_file(&path) {
            Ok(translations) => {
                result
                    .resources
                    .insert_namespace(locale, namespace, translations);
                result.files_loaded += 1;
            }
            Err(e) => {
                result.warnings.push(ResourceScanWarning {
                    file_path: path.to_string_lossy().to_string(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    Ok(result)
}
