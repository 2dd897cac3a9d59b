#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod error;

pub use config::{load_typed_json, parse_loaded_json, LoadedJson};
pub use error::{EngineError, ShaderStage};
