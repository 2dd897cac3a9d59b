use std::fmt;
use std::path::PathBuf;

/// Programmable stage a driver log belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors shared by the fragnode crates.
///
/// Lives in `fragnode-core` so both the GL-free source layer and the glow backend can
/// return it without depending on each other.
#[derive(Debug)]
pub enum EngineError {
    // ---- Files ----
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    // ---- Driver ----
    /// `src` is the exact text handed to the driver, so log line numbers can be matched
    /// against the generated header.
    Compile {
        stage: ShaderStage,
        log: String,
        src: String,
    },
    Link(String),
    GlCreate(String),

    Other(String),
}

impl EngineError {
    pub fn other<T: Into<String>>(s: T) -> Self {
        EngineError::Other(s.into())
    }

    /// Stage and assembled text of a failed compile.
    pub fn shader_source(&self) -> Option<(ShaderStage, &str)> {
        match self {
            EngineError::Compile { stage, src, .. } => Some((*stage, src.as_str())),
            _ => None,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Io { path, source } => {
                write!(f, "reading {} failed: {}", path.display(), source)
            }
            EngineError::Json { path, source } => {
                write!(f, "{} is not valid JSON for this type: {}", path.display(), source)
            }
            EngineError::Compile { stage, log, .. } => {
                write!(f, "{stage} shader failed to compile: {}", log.trim_end())
            }
            EngineError::Link(log) => write!(f, "program failed to link: {}", log.trim_end()),
            EngineError::GlCreate(msg) => write!(f, "GL object creation failed: {msg}"),
            EngineError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io { source, .. } => Some(source),
            EngineError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}
