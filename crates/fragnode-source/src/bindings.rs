//! Define and uniform inference for node inputs.
//!
//! Textures and numeric uniforms both announce their GLSL type to the shader through a
//! `<NAME>_TYPE` define, so user code can declare `uniform U_TEX0_TYPE u_tex0;` without
//! knowing whether the host sent one frame or many.

use crate::{Defines, InputValue, Inputs, UniformValue, Uniforms};

/// How an image input is realized on the GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    Texture2D,
    Texture2DArray { total_frames: usize },
}

impl TextureKind {
    pub fn sampler_type(self) -> &'static str {
        match self {
            TextureKind::Texture2D => "sampler2D",
            TextureKind::Texture2DArray { .. } => "sampler2DArray",
        }
    }
}

/// One texture in binding order. `unit` is also the value written to the sampler uniform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureBinding {
    pub unit: u32,
    pub name: String,
    pub kind: TextureKind,
    pub width: u32,
    pub height: u32,
}

pub fn type_define_name(key: &str) -> String {
    format!("{}_TYPE", key.to_uppercase())
}

pub fn total_frames_define_name(key: &str) -> String {
    format!("{}_TOTALFRAMES", key.to_uppercase())
}

/// Decide texture units for every image input and record the matching uniforms/defines.
///
/// Units are assigned from 0 in `inputs` order. Empty inputs and numeric inputs get nothing.
pub fn plan_textures(
    inputs: &Inputs,
    uniforms: &mut Uniforms,
    defines: &mut Defines,
) -> Vec<TextureBinding> {
    let mut bindings = Vec::new();

    for (key, value) in inputs {
        let (kind, width, height) = match value {
            None => {
                tracing::debug!(input = %key, "input is empty, nothing bound");
                continue;
            }
            Some(InputValue::Image(frame)) => {
                (TextureKind::Texture2D, frame.width(), frame.height())
            }
            Some(InputValue::ImageArray(stack)) => (
                TextureKind::Texture2DArray {
                    total_frames: stack.total_frames(),
                },
                stack.width(),
                stack.height(),
            ),
            Some(InputValue::Scalar(_)) | Some(InputValue::Vector(_)) => continue,
        };

        uniforms.insert(
            format!("{key}Resolution"),
            UniformValue::Vector(vec![width as f64, height as f64]),
        );
        if let TextureKind::Texture2DArray { total_frames } = kind {
            uniforms.insert(
                format!("{key}TotalFrames"),
                UniformValue::Float(total_frames as f64),
            );
            defines.set(total_frames_define_name(key), total_frames);
        }
        defines.set(type_define_name(key), kind.sampler_type());

        bindings.push(TextureBinding {
            unit: bindings.len() as u32,
            name: key.clone(),
            kind,
            width,
            height,
        });
    }

    bindings
}

/// Copy numeric inputs into `uniforms` and declare their GLSL type.
///
/// Vector length is passed through as `vecN` unchecked; an unsupported N surfaces as a
/// shader compile error.
pub fn load_uniforms(inputs: &Inputs, uniforms: &mut Uniforms, defines: &mut Defines) {
    for (key, value) in inputs {
        match value {
            Some(InputValue::Scalar(v)) => {
                uniforms.insert(key.clone(), UniformValue::Float(*v));
                defines.set(type_define_name(key), "float");
            }
            Some(InputValue::Vector(v)) => {
                uniforms.insert(key.clone(), UniformValue::Vector(v.clone()));
                defines.set(type_define_name(key), format!("vec{}", v.len()));
            }
            // Empty inputs were already reported by `plan_textures`.
            None | Some(InputValue::Image(_)) | Some(InputValue::ImageArray(_)) => {}
        }
    }
}
