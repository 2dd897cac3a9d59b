//! fragnode runtime (glow/OpenGL backend)
//
// This crate only talks to the GPU:
// - compile/link assembled shader sources
// - upload image inputs as 2D / 2D-array textures
// - bind textures and uniforms, draw the billboard quad
//
// Source assembly and define inference live in `fragnode-source`. The host owns the GL
// context, framebuffers and timing.
#![allow(clippy::missing_safety_doc)]
#![deny(missing_debug_implementations)]

pub mod billboard;
pub mod pass;
pub mod program;
pub mod texture;
pub mod uniforms;

pub use billboard::{Billboard, BILLBOARD_GEOM};
pub use fragnode_core::EngineError;
pub use pass::FragmentPass;
pub use program::{compile_program, set_program, ShaderProgram};
pub use texture::{load_textures, use_textures, Texture};
pub use uniforms::{use_builtin_uniforms, use_uniforms, FrameCtx};
