use std::{
    future::Future,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::core::Translations;
use crate::error::I18nError;

/// Source of namespace bundles that are not resident in the engine yet.
///
/// `Ok(None)` means the backend has nothing for that pair; the engine then
/// treats the namespace as loaded and empty.
pub trait Backend {
    fn read(
        &self,
        language: &str,
        namespace: &str,
    ) -> impl Future<Output = Result<Option<Translations>, I18nError>> + Send;
}

/// Backend for engines whose resources are all supplied up front.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBackend;

impl Backend for NoBackend {
    fn read(
        &self,
        _language: &str,
        _namespace: &str,
    ) -> impl Future<Output = Result<Option<Translations>, I18nError>> + Send {
        std::future::ready(Ok(None))
    }
}

/// Reads `<root>/<language>/<namespace>.json`.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, language: &str, namespace: &str) -> PathBuf {
        self.root
            .join(language)
            .join(format!("{}.json", namespace))
    }
}

impl Backend for FsBackend {
    fn read(
        &self,
        language: &str,
        namespace: &str,
    ) -> impl Future<Output = Result<Option<Translations>, I18nError>> + Send {
        let path = self.path_for(language, namespace);
        let language = language.to_string();
        let namespace = namespace.to_string();

        async move {
            let load_error = |message: String| I18nError::BackendLoad {
                language: language.clone(),
                namespace: namespace.clone(),
                message,
            };

            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
                Err(e) => return Err(load_error(format!("{}: {}", path.display(), e))),
            };

            match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => Ok(Some(map)),
                Ok(_) => Err(load_error(format!(
                    "{}: root must be an object",
                    path.display()
                ))),
                Err(e) => Err(load_error(format!("{}: {}", path.display(), e))),
            }
        }
    }
}
