#![forbid(unsafe_code)]

//! GL-free shader source layer.
//!
//! Everything here is plain data and string assembly: GLSL versions and dialects, the
//! define/uniform tables, input values, include expansion and binding-derived defines.
//! Backends (see `fragnode-runtime-glow`) take the output of this crate and talk to the GPU.
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]

pub mod assemble;
pub mod bindings;
pub mod defines;
pub mod error;
pub mod fragment;
pub mod include;
pub mod input;
pub mod pass_config;
pub mod version;

pub use assemble::{fragment_shader, header_for, vertex_shader};
pub use bindings::{load_uniforms, plan_textures, TextureBinding, TextureKind};
pub use defines::{Defines, UniformValue, Uniforms};
pub use error::{IncludeError, SourceError};
pub use fragment::{Dialect, FragmentCode, DEFAULT_FRAGMENT_SHADER, DEFAULT_SHADERTOY_SHADER};
#[cfg(feature = "http")]
pub use include::HttpIncludeProvider;
pub use include::{resolve_includes, IncludeConfig, IncludeProvider, ResolveReport};
pub use input::{ImageFrame, ImageStack, InputValue, Inputs, PixelFormat};
pub use pass_config::{Pass, PassConfig};
pub use version::GlslVersion;
