use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{COMMON_NAMESPACE, MergeStrategy, ResourceTable};
use crate::init::I18nOptions;

pub const CONFIG_FILE_NAME: &str = ".i18nrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_language")]
    pub fallback_language: String,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_ns", rename = "defaultNS")]
    pub default_ns: String,
    #[serde(default = "default_namespaces")]
    pub ns: Vec<String>,
    #[serde(default)]
    pub merge_strategy: MergeStrategy,
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
}

fn default_language() -> String {
    "pt-BR".to_string()
}

fn default_ns() -> String {
    COMMON_NAMESPACE.to_string()
}

fn default_namespaces() -> Vec<String> {
    vec![COMMON_NAMESPACE.to_string()]
}

fn default_messages_root() -> String {
    "./locales".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            fallback_language: default_language(),
            debug: false,
            default_ns: default_ns(),
            ns: default_namespaces(),
            merge_strategy: MergeStrategy::default(),
            messages_root: default_messages_root(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Language tokens must be non-empty and `defaultNS` must be one of `ns`.
    pub fn validate(&self) -> Result<()> {
        if self.default_language.trim().is_empty() {
            bail!("'defaultLanguage' must not be empty");
        }
        if self.fallback_language.trim().is_empty() {
            bail!("'fallbackLanguage' must not be empty");
        }
        if self.ns.is_empty() {
            bail!("'ns' must list at least one namespace");
        }
        if !self.ns.contains(&self.default_ns) {
            bail!(
                "'defaultNS' \"{}\" is not listed in 'ns' ({})",
                self.default_ns,
                self.ns.join(", ")
            );
        }
        Ok(())
    }

    /// Initializer options for this config and the given caller resources.
    pub fn to_options(&self, resources: ResourceTable) -> I18nOptions {
        I18nOptions {
            default_language: self.default_language.clone(),
            fallback_language: self.fallback_language.clone(),
            debug: self.debug,
            resources,
            default_ns: self.default_ns.clone(),
            ns: self.ns.clone(),
            merge_strategy: self.merge_strategy,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory containing the config file, or the start directory.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    /// `messagesRoot` resolved against the config file's directory.
    pub fn messages_root(&self) -> PathBuf {
        self.base_dir.join(&self.config.messages_root)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
