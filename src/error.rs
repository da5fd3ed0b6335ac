use thiserror::Error;

/// Errors raised by the translation engine and locale helpers.
///
/// Configuration and CLI code wrap these in `anyhow` with context; library
/// callers can match on the variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The token is not one of the languages the caller asked about.
    #[error("unsupported language: \"{0}\"")]
    UnsupportedLanguage(String),

    /// A backend failed to produce a namespace bundle.
    #[error("failed to load namespace \"{namespace}\" for \"{language}\": {message}")]
    BackendLoad {
        language: String,
        namespace: String,
        message: String,
    },

    /// A resource document could not be used as a translation tree.
    #[error("invalid resource {path}: {message}")]
    InvalidResource { path: String, message: String },
}
