//! pleme-i18n - bilingual translation resources for Pleme products
//!
//! Ships built-in `pt-BR` and `en-US` dictionaries of common UI strings and
//! merges caller translations over them before handing the result to a
//! translation engine.
//!
//! ```
//! use pleme_i18n::{I18nOptions, init_i18n};
//!
//! let i18n = init_i18n(I18nOptions::default());
//! assert_eq!(i18n.t("buttons.save"), "Salvar");
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Locales, built-in dictionaries, resource tables and merging
//! - `engine`: Translation engine handle, backends and lookup
//! - `init`: Merge-then-initialize entry points

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod init;

pub use crate::core::{
    MergeStrategy, ResourceTable, SupportedLanguage, Translations, default_common,
    default_common_en_us, default_common_pt_br, display_name_for, is_language_supported,
    language_display_name, resolve_resources, supported_languages,
};
pub use crate::engine::{Backend, FsBackend, I18n, LoadState, NoBackend, TOptions};
pub use crate::error::I18nError;
pub use crate::init::{I18nOptions, init_i18n, init_i18n_with_backend};
