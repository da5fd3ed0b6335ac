//! Built-in `common` dictionaries for the baseline languages.
//!
//! The strings live in `locales/<language>/common.json` and are embedded at
//! compile time. Callers can read them to extend or override specific groups
//! before passing resources to [`crate::init_i18n`].

use std::sync::LazyLock;

use serde_json::Value;

use super::{SupportedLanguage, Translations};

/// Namespace that receives the built-in defaults.
pub const COMMON_NAMESPACE: &str = "common";

const COMMON_PT_BR_JSON: &str = include_str!("../../locales/pt-BR/common.json");
const COMMON_EN_US_JSON: &str = include_str!("../../locales/en-US/common.json");

static COMMON_PT_BR: LazyLock<Translations> =
    LazyLock::new(|| parse_embedded("pt-BR/common.json", COMMON_PT_BR_JSON));
static COMMON_EN_US: LazyLock<Translations> =
    LazyLock::new(|| parse_embedded("en-US/common.json", COMMON_EN_US_JSON));

fn parse_embedded(name: &str, content: &str) -> Translations {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => map,
        Ok(_) => panic!("embedded dictionary {name} must be a JSON object"),
        Err(e) => panic!("embedded dictionary {name} is not valid JSON: {e}"),
    }
}

pub fn default_common(language: SupportedLanguage) -> &'static Translations {
    match language {
        SupportedLanguage::PtBr => &*COMMON_PT_BR,
        SupportedLanguage::EnUs => &*COMMON_EN_US,
    }
}

pub fn default_common_pt_br() -> &'static Translations {
    default_common(SupportedLanguage::PtBr)
}

pub fn default_common_en_us() -> &'static Translations {
    default_common(SupportedLanguage::EnUs)
}
