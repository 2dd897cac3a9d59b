//! JSON config loading.
//!
//! Callers own their config types; this module only turns "path on disk" into a typed
//! value with errors that carry the offending path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::EngineError;

/// Raw text of a JSON file together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedJson {
    pub path: PathBuf,
    pub text: String,
}

impl LoadedJson {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(|source| EngineError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, text })
    }

    /// Directory that relative paths inside this file resolve against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Deserialize an already-loaded JSON document.
pub fn parse_loaded_json<T: DeserializeOwned>(loaded: &LoadedJson) -> Result<T, EngineError> {
    serde_json::from_str(&loaded.text).map_err(|source| EngineError::Json {
        path: loaded.path.clone(),
        source,
    })
}

/// Read and deserialize a JSON file in one step.
pub fn load_typed_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, EngineError> {
    let loaded = LoadedJson::read(path)?;
    parse_loaded_json(&loaded)
}
