//! JSON pass descriptions.
//!
//! ```json
//! {
//!   "version": "330",
//!   "specs": "shadertoy",
//!   "src_path": "plasma.frag",
//!   "defines": { "STEPS": 8 },
//!   "includes": { "base_url": "https://lygia.xyz" }
//! }
//! ```

use std::path::{Path, PathBuf};

use fragnode_core::{parse_loaded_json, EngineError, LoadedJson};
use linked_hash_map::LinkedHashMap;
use serde::Deserialize;

use crate::{
    resolve_includes, Defines, Dialect, FragmentCode, GlslVersion, IncludeConfig,
    IncludeProvider, ResolveReport, SourceError,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PassConfig {
    #[serde(default)]
    pub version: GlslVersion,
    #[serde(default, alias = "specs")]
    pub dialect: Dialect,
    #[serde(default)]
    pub src: Option<String>,
    /// Relative to the config file.
    #[serde(default)]
    pub src_path: Option<PathBuf>,
    /// Extra defines emitted before the binding-derived ones.
    #[serde(default)]
    pub defines: LinkedHashMap<String, serde_json::Value>,
    #[serde(default)]
    pub includes: IncludeConfig,
    #[serde(default = "default_true")]
    pub resolve_includes: bool,
}

fn default_true() -> bool {
    true
}

/// A pass ready for assembly.
#[derive(Debug, Clone)]
pub struct Pass {
    pub code: FragmentCode,
    pub defines: Defines,
    pub includes: IncludeConfig,
    pub resolve_includes: bool,
}

impl Pass {
    /// Expand library includes in the user code, if enabled for this pass.
    pub fn resolve(&mut self, provider: &mut dyn IncludeProvider) -> ResolveReport {
        if !self.resolve_includes {
            return ResolveReport::default();
        }
        let (src, report) = resolve_includes(&self.code.src, &self.includes, provider);
        self.code.src = src;
        report
    }
}

impl PassConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Pass, SourceError> {
        let loaded = LoadedJson::read(path)?;
        let cfg: PassConfig = parse_loaded_json(&loaded)?;
        cfg.into_pass(loaded.base_dir())
    }

    pub fn into_pass(self, base_dir: &Path) -> Result<Pass, SourceError> {
        let src = match (self.src, self.src_path) {
            (Some(_), Some(_)) => {
                return Err(SourceError::Config(
                    "`src` and `src_path` are mutually exclusive".to_string(),
                ))
            }
            (Some(src), None) => src,
            (None, Some(rel)) => {
                let path = base_dir.join(rel);
                std::fs::read_to_string(&path)
                    .map_err(|source| EngineError::Io { path, source })?
            }
            (None, None) => FragmentCode::default_for(self.dialect, self.version).src,
        };

        let mut defines = Defines::new();
        for (name, value) in self.defines {
            let value = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => u8::from(b).to_string(),
                other => {
                    return Err(SourceError::Config(format!(
                        "define {name}: expected string, number or bool, got {other}"
                    )))
                }
            };
            defines.set(name, value);
        }

        Ok(Pass {
            code: FragmentCode::new(self.version, self.dialect, src),
            defines,
            includes: self.includes,
            resolve_includes: self.resolve_includes,
        })
    }
}
