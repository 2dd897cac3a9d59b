//! Image inputs as GL textures.

use glow::HasContext;

use fragnode_core::EngineError;
use fragnode_source::{
    plan_textures, Defines, InputValue, Inputs, PixelFormat, TextureBinding, TextureKind, Uniforms,
};

fn gl_formats(format: PixelFormat) -> (i32, u32) {
    match format {
        PixelFormat::Rgb => (glow::RGB32F as i32, glow::RGB),
        PixelFormat::Rgba => (glow::RGBA32F as i32, glow::RGBA),
    }
}

unsafe fn set_sampling(gl: &glow::Context, target: u32) {
    gl.tex_parameter_i32(target, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
    gl.tex_parameter_i32(target, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
    gl.tex_parameter_i32(target, glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE as i32);
    gl.tex_parameter_i32(target, glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE as i32);
}

/// A texture created for one binding. Owned by whoever loaded it; release with `destroy`.
#[derive(Debug)]
pub struct Texture {
    pub tex: glow::NativeTexture,
    pub binding: TextureBinding,
}

impl Texture {
    pub fn target(&self) -> u32 {
        match self.binding.kind {
            TextureKind::Texture2D => glow::TEXTURE_2D,
            TextureKind::Texture2DArray { .. } => glow::TEXTURE_2D_ARRAY,
        }
    }

    /// Upload `value` as described by `binding`.
    pub unsafe fn upload(
        gl: &glow::Context,
        binding: TextureBinding,
        value: &InputValue,
    ) -> Result<Self, EngineError> {
        let tex = gl
            .create_texture()
            .map_err(|e| EngineError::GlCreate(format!("create_texture({}): {e}", binding.name)))?;

        gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
        match (binding.kind, value) {
            (TextureKind::Texture2D, InputValue::Image(frame)) => {
                let (internal, format) = gl_formats(frame.format());
                let pixels = frame.bottom_up_data();
                gl.bind_texture(glow::TEXTURE_2D, Some(tex));
                set_sampling(gl, glow::TEXTURE_2D);
                gl.tex_image_2d(
                    glow::TEXTURE_2D,
                    0,
                    internal,
                    frame.width() as i32,
                    frame.height() as i32,
                    0,
                    format,
                    glow::FLOAT,
                    Some(bytemuck::cast_slice(&pixels)),
                );
                gl.bind_texture(glow::TEXTURE_2D, None);
            }
            (TextureKind::Texture2DArray { total_frames }, InputValue::ImageArray(stack)) => {
                let (internal, format) = gl_formats(stack.format());
                let pixels = stack.layered_bottom_up_data();
                gl.bind_texture(glow::TEXTURE_2D_ARRAY, Some(tex));
                set_sampling(gl, glow::TEXTURE_2D_ARRAY);
                gl.tex_image_3d(
                    glow::TEXTURE_2D_ARRAY,
                    0,
                    internal,
                    stack.width() as i32,
                    stack.height() as i32,
                    total_frames as i32,
                    0,
                    format,
                    glow::FLOAT,
                    Some(bytemuck::cast_slice(&pixels)),
                );
                gl.bind_texture(glow::TEXTURE_2D_ARRAY, None);
            }
            _ => {
                gl.delete_texture(tex);
                return Err(EngineError::other(format!(
                    "texture {}: input does not match planned {:?}",
                    binding.name, binding.kind
                )));
            }
        }

        Ok(Self { tex, binding })
    }

    /// Bind to this texture's unit and point the sampler uniform of the same name at it.
    pub unsafe fn bind(&self, gl: &glow::Context, program: glow::NativeProgram) {
        let unit = self.binding.unit;
        gl.active_texture(glow::TEXTURE0 + unit);
        gl.bind_texture(self.target(), Some(self.tex));
        if let Some(loc) = gl.get_uniform_location(program, &self.binding.name) {
            gl.uniform_1_i32(Some(&loc), unit as i32);
        }
    }

    pub unsafe fn destroy(&self, gl: &glow::Context) {
        gl.delete_texture(self.tex);
    }
}

/// Create one texture per non-empty image input, recording resolution/frame uniforms and
/// type defines as it goes. Units follow `inputs` order.
pub unsafe fn load_textures(
    gl: &glow::Context,
    inputs: &Inputs,
    uniforms: &mut Uniforms,
    defines: &mut Defines,
) -> Result<Vec<Texture>, EngineError> {
    let plan = plan_textures(inputs, uniforms, defines);
    let mut textures = Vec::with_capacity(plan.len());

    for binding in plan {
        let Some(Some(value)) = inputs.get(&binding.name) else {
            continue;
        };
        match Texture::upload(gl, binding, value) {
            Ok(t) => textures.push(t),
            Err(e) => {
                for t in &textures {
                    t.destroy(gl);
                }
                return Err(e);
            }
        }
    }

    tracing::debug!(count = textures.len(), "textures loaded");
    Ok(textures)
}

pub unsafe fn use_textures(gl: &glow::Context, program: glow::NativeProgram, textures: &[Texture]) {
    gl.use_program(Some(program));
    for texture in textures {
        texture.bind(gl, program);
    }
}
