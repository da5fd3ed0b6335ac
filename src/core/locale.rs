use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::I18nError;

/// The baseline languages that ship with built-in translations.
///
/// Tokens are exact and case-sensitive: `"pt-BR"` parses, `"pt-br"` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SupportedLanguage {
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl SupportedLanguage {
    /// Fixed order: Portuguese first, English second.
    pub const ALL: [SupportedLanguage; 2] = [SupportedLanguage::PtBr, SupportedLanguage::EnUs];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedLanguage::PtBr => "pt-BR",
            SupportedLanguage::EnUs => "en-US",
        }
    }

    /// Human-readable name, each written in its own language.
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportedLanguage::PtBr => "Português (Brasil)",
            SupportedLanguage::EnUs => "English (US)",
        }
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SupportedLanguage {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for SupportedLanguage {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt-BR" => Ok(SupportedLanguage::PtBr),
            "en-US" => Ok(SupportedLanguage::EnUs),
            other => Err(I18nError::UnsupportedLanguage(other.to_string())),
        }
    }
}

pub fn is_language_supported(language: &str) -> bool {
    language.parse::<SupportedLanguage>().is_ok()
}

pub fn supported_languages() -> [SupportedLanguage; 2] {
    SupportedLanguage::ALL
}

pub fn language_display_name(language: SupportedLanguage) -> &'static str {
    language.display_name()
}

/// Display name for an arbitrary token.
///
/// Unsupported tokens are an error rather than an empty name.
pub fn display_name_for(language: &str) -> Result<&'static str, I18nError> {
    language
        .parse::<SupportedLanguage>()
        .map(|lang| lang.display_name())
}
