use glow::HasContext;

use fragnode_core::EngineError;

/// Two triangles covering clip space, `vec2` positions only.
pub const BILLBOARD_GEOM: [f32; 12] = [
    // first triangle
    -1.0, -1.0, //
    -1.0, 1.0, //
    1.0, 1.0, //
    // second triangle
    -1.0, -1.0, //
    1.0, 1.0, //
    1.0, -1.0,
];

pub const BILLBOARD_VERTEX_COUNT: i32 = (BILLBOARD_GEOM.len() / 2) as i32;

/// Full-screen quad bound to a program's `a_position` attribute.
#[derive(Debug)]
pub struct Billboard {
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
}

impl Billboard {
    pub unsafe fn new(
        gl: &glow::Context,
        program: glow::NativeProgram,
    ) -> Result<Self, EngineError> {
        let attrib = gl.get_attrib_location(program, "a_position").ok_or_else(|| {
            EngineError::GlCreate("program has no active a_position attribute".into())
        })?;

        let vao = gl
            .create_vertex_array()
            .map_err(|e| EngineError::GlCreate(format!("create_vertex_array: {e}")))?;
        let vbo = match gl.create_buffer() {
            Ok(vbo) => vbo,
            Err(e) => {
                gl.delete_vertex_array(vao);
                return Err(EngineError::GlCreate(format!("create_buffer: {e}")));
            }
        };

        gl.bind_vertex_array(Some(vao));
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(&BILLBOARD_GEOM),
            glow::STATIC_DRAW,
        );

        gl.enable_vertex_attrib_array(attrib);
        gl.vertex_attrib_pointer_f32(attrib, 2, glow::FLOAT, false, 2 * 4, 0);

        gl.bind_buffer(glow::ARRAY_BUFFER, None);
        gl.bind_vertex_array(None);

        Ok(Self { vao, vbo })
    }

    pub unsafe fn draw(&self, gl: &glow::Context) {
        gl.bind_vertex_array(Some(self.vao));
        gl.draw_arrays(glow::TRIANGLES, 0, BILLBOARD_VERTEX_COUNT);
        gl.bind_vertex_array(None);
    }

    pub unsafe fn destroy(&mut self, gl: &glow::Context) {
        gl.delete_vertex_array(self.vao);
        gl.delete_buffer(self.vbo);
    }
}
