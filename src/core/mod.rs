//! Locale model, built-in dictionaries, resource tables and the merge step.

pub mod defaults;
pub mod locale;
pub mod merge;
pub mod resources;

pub use defaults::{COMMON_NAMESPACE, default_common, default_common_en_us, default_common_pt_br};
pub use locale::{
    SupportedLanguage, display_name_for, is_language_supported, language_display_name,
    supported_languages,
};
pub use merge::{MergeStrategy, deep_extend, merge_common, resolve_resources};
pub use resources::{
    LocaleResources, ResourceScanWarning, ResourceTable, ScanResourcesResult, Translations,
    scan_resources,
};
