use thiserror::Error;

/// Errors raised while turning a pass description into shader source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(
        "unknown GLSL version {0:?} \
         (expected one of 100, 120, 130, 140, 150, 330, \"330 core\", 400, 410, 420, 430, 440)"
    )]
    UnknownVersion(String),

    #[error("image data has {actual} floats, expected {expected} ({width}x{height}x{channels})")]
    ImageShape {
        width: u32,
        height: u32,
        channels: usize,
        expected: usize,
        actual: usize,
    },

    #[error("image stack has no frames")]
    EmptyStack,

    #[error("pass config: {0}")]
    Config(String),

    #[error(transparent)]
    Engine(#[from] fragnode_core::EngineError),
}

/// Failure to fetch a single include. Never fatal to the resolve pass.
#[derive(Debug, Error)]
pub enum IncludeError {
    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("GET {url} failed: {msg}")]
    Transport { url: String, msg: String },

    #[error("reading body of {url} failed: {msg}")]
    Body { url: String, msg: String },
}
