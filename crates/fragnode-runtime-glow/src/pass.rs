use fragnode_core::EngineError;
use fragnode_source::{
    load_uniforms, Defines, FragmentCode, InputValue, Inputs, UniformValue, Uniforms,
};

use crate::{
    load_textures, set_program, use_builtin_uniforms, use_textures, use_uniforms, Billboard,
    FrameCtx, ShaderProgram, Texture,
};

/// One configured fragment node: program, quad, textures and uniform values.
///
/// Built once per configuration (inputs' shapes or code changed), rendered every frame.
/// The host owns the GL context, so GPU objects are released with [`FragmentPass::destroy`].
#[derive(Debug)]
pub struct FragmentPass {
    program: ShaderProgram,
    billboard: Billboard,
    textures: Vec<Texture>,
    uniforms: Uniforms,
    defines: Defines,
}

impl FragmentPass {
    /// Load textures, then uniforms, then build the program against the defines both produced.
    ///
    /// `base_defines` come first in the emitted block; binding-derived defines with the same
    /// name replace them.
    pub unsafe fn configure(
        gl: &glow::Context,
        code: &FragmentCode,
        base_defines: &Defines,
        inputs: &Inputs,
    ) -> Result<Self, EngineError> {
        let mut uniforms = Uniforms::new();
        let mut defines = base_defines.clone();

        let mut textures = load_textures(gl, inputs, &mut uniforms, &mut defines)?;
        load_uniforms(inputs, &mut uniforms, &mut defines);

        let mut program = match set_program(gl, code, &defines) {
            Ok(p) => p,
            Err(e) => {
                if let Some((stage, src)) = e.shader_source() {
                    tracing::debug!(%stage, "rejected {stage} source:\n{src}");
                }
                release(gl, &mut textures);
                return Err(e);
            }
        };
        let billboard = match Billboard::new(gl, program.program) {
            Ok(b) => b,
            Err(e) => {
                release(gl, &mut textures);
                program.destroy(gl);
                return Err(e);
            }
        };

        tracing::info!(
            dialect = %code.dialect,
            textures = textures.len(),
            uniforms = uniforms.len(),
            "fragment pass configured"
        );

        Ok(Self {
            program,
            billboard,
            textures,
            uniforms,
            defines,
        })
    }

    pub fn program(&self) -> &ShaderProgram {
        &self.program
    }

    pub fn defines(&self) -> &Defines {
        &self.defines
    }

    pub fn uniforms(&self) -> &Uniforms {
        &self.uniforms
    }

    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }

    /// Update a numeric value between frames. Types are baked into the program, so only
    /// names already known to this pass are accepted.
    pub fn set_value(&mut self, name: &str, value: &InputValue) -> Result<(), EngineError> {
        let slot = self
            .uniforms
            .get_mut(name)
            .ok_or_else(|| EngineError::other(format!("unknown uniform {name}")))?;
        let next = match value {
            InputValue::Scalar(v) => UniformValue::Float(*v),
            InputValue::Vector(v) => UniformValue::Vector(v.clone()),
            InputValue::Image(_) | InputValue::ImageArray(_) => {
                return Err(EngineError::other(format!(
                    "{name}: images need a reconfigure, not a value update"
                )))
            }
        };
        if !same_shape(slot, &next) {
            return Err(EngineError::other(format!(
                "{name}: value shape changed, reconfigure the pass"
            )));
        }
        *slot = next;
        Ok(())
    }

    /// Draw into whatever framebuffer/viewport the host has bound.
    pub unsafe fn render(&self, gl: &glow::Context, frame: &FrameCtx) {
        let prog = self.program.program;
        use_textures(gl, prog, &self.textures);
        use_uniforms(gl, prog, &self.uniforms);
        use_builtin_uniforms(gl, prog, frame);
        self.billboard.draw(gl);
    }

    pub unsafe fn destroy(&mut self, gl: &glow::Context) {
        release(gl, &mut self.textures);
        self.billboard.destroy(gl);
        self.program.destroy(gl);
    }
}

fn same_shape(a: &UniformValue, b: &UniformValue) -> bool {
    match (a, b) {
        (UniformValue::Float(_), UniformValue::Float(_)) => true,
        (UniformValue::Vector(a), UniformValue::Vector(b)) => a.len() == b.len(),
        _ => false,
    }
}

unsafe fn release(gl: &glow::Context, textures: &mut Vec<Texture>) {
    for t in textures.drain(..) {
        t.destroy(gl);
    }
}
