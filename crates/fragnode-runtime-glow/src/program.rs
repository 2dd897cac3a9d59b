use glow::HasContext;

use fragnode_core::{EngineError, ShaderStage};
use fragnode_source::{fragment_shader, vertex_shader, Defines, FragmentCode};

unsafe fn compile_stage(
    gl: &glow::Context,
    stage: ShaderStage,
    src: &str,
) -> Result<glow::NativeShader, EngineError> {
    let kind = match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    };
    let shader = gl
        .create_shader(kind)
        .map_err(|e| EngineError::GlCreate(format!("create_shader({stage}): {e}")))?;
    gl.shader_source(shader, src);
    gl.compile_shader(shader);
    if gl.get_shader_compile_status(shader) {
        return Ok(shader);
    }

    let log = gl.get_shader_info_log(shader);
    gl.delete_shader(shader);
    Err(EngineError::Compile {
        stage,
        log,
        src: src.to_string(),
    })
}

/// Compile both stages and link them. Shader objects never outlive this call.
pub unsafe fn compile_program(
    gl: &glow::Context,
    vert_src: &str,
    frag_src: &str,
) -> Result<glow::NativeProgram, EngineError> {
    let vs = compile_stage(gl, ShaderStage::Vertex, vert_src)?;
    let fs = match compile_stage(gl, ShaderStage::Fragment, frag_src) {
        Ok(fs) => fs,
        Err(e) => {
            gl.delete_shader(vs);
            return Err(e);
        }
    };
    let program = match gl.create_program() {
        Ok(p) => p,
        Err(e) => {
            gl.delete_shader(vs);
            gl.delete_shader(fs);
            return Err(EngineError::GlCreate(format!("create_program: {e}")));
        }
    };

    for shader in [vs, fs] {
        gl.attach_shader(program, shader);
    }
    gl.link_program(program);
    for shader in [vs, fs] {
        gl.detach_shader(program, shader);
        gl.delete_shader(shader);
    }

    if !gl.get_program_link_status(program) {
        let log = gl.get_program_info_log(program);
        gl.delete_program(program);
        return Err(EngineError::Link(log));
    }
    Ok(program)
}

/// A linked program plus the exact sources it was built from (handy when the driver log
/// points at a line in the generated header).
#[derive(Debug)]
pub struct ShaderProgram {
    pub program: glow::NativeProgram,
    pub vert_src: String,
    pub frag_src: String,
}

impl ShaderProgram {
    pub unsafe fn new(
        gl: &glow::Context,
        vert_src: String,
        frag_src: String,
    ) -> Result<Self, EngineError> {
        let program = compile_program(gl, &vert_src, &frag_src)?;
        Ok(Self {
            program,
            vert_src,
            frag_src,
        })
    }

    pub unsafe fn destroy(&mut self, gl: &glow::Context) {
        gl.delete_program(self.program);
    }
}

/// Assemble both stages for `code` and hand them to the driver.
///
/// Compile failures carry the driver log and the assembled text of the failing stage.
pub unsafe fn set_program(
    gl: &glow::Context,
    code: &FragmentCode,
    defines: &Defines,
) -> Result<ShaderProgram, EngineError> {
    tracing::debug!(
        version = %code.version,
        dialect = %code.dialect,
        defines = defines.len(),
        "building fragment program"
    );
    ShaderProgram::new(gl, vertex_shader(code.version), fragment_shader(code, defines))
}
