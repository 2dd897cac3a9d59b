use chrono::{Datelike, Local, Timelike};
use glow::HasContext;

use fragnode_source::Uniforms;

/// Write each value whose name the program declares. Unknown names are skipped.
pub unsafe fn use_uniforms(
    gl: &glow::Context,
    program: glow::NativeProgram,
    uniforms: &Uniforms,
) {
    gl.use_program(Some(program));
    for (name, value) in uniforms {
        let Some(loc) = gl.get_uniform_location(program, name) else {
            continue;
        };
        let loc = Some(&loc);
        match *value.components().as_slice() {
            [x] => gl.uniform_1_f32(loc, x),
            [x, y] => gl.uniform_2_f32(loc, x, y),
            [x, y, z] => gl.uniform_3_f32(loc, x, y, z),
            [x, y, z, w] => gl.uniform_4_f32(loc, x, y, z, w),
            ref c => {
                tracing::warn!(
                    uniform = %name,
                    len = c.len(),
                    "no GL upload for this vector length"
                );
            }
        }
    }
}

/// Per-frame values behind the built-in `u_*` uniforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCtx {
    pub width: i32,
    pub height: i32,
    pub time: f32,
    pub delta: f32,
    pub fps: f32,
    pub frame: i32,
    /// year, month (0-based), day, seconds since midnight.
    pub date: [f32; 4],
}

impl FrameCtx {
    /// Stamp a frame with the local wall-clock date. `fps` is derived from `delta`.
    pub fn new(width: i32, height: i32, time: f32, delta: f32, frame: i32) -> Self {
        Self {
            width,
            height,
            time,
            delta,
            fps: if delta > 0.0 { 1.0 / delta } else { 0.0 },
            frame,
            date: local_date(),
        }
    }
}

pub fn local_date() -> [f32; 4] {
    let now = Local::now();
    let secs = now.num_seconds_from_midnight() as f32 + now.nanosecond() as f32 * 1e-9;
    [
        now.year() as f32,
        now.month0() as f32,
        now.day() as f32,
        secs,
    ]
}

/// `u_date`, `u_resolution`, `u_delta`, `u_time`, `u_fps`, `u_frame` (set if present).
pub unsafe fn use_builtin_uniforms(
    gl: &glow::Context,
    program: glow::NativeProgram,
    frame: &FrameCtx,
) {
    gl.use_program(Some(program));
    if let Some(loc) = gl.get_uniform_location(program, "u_date") {
        let [y, m, d, s] = frame.date;
        gl.uniform_4_f32(Some(&loc), y, m, d, s);
    }
    if let Some(loc) = gl.get_uniform_location(program, "u_resolution") {
        gl.uniform_2_f32(Some(&loc), frame.width as f32, frame.height as f32);
    }
    if let Some(loc) = gl.get_uniform_location(program, "u_delta") {
        gl.uniform_1_f32(Some(&loc), frame.delta);
    }
    if let Some(loc) = gl.get_uniform_location(program, "u_time") {
        gl.uniform_1_f32(Some(&loc), frame.time);
    }
    if let Some(loc) = gl.get_uniform_location(program, "u_fps") {
        gl.uniform_1_f32(Some(&loc), frame.fps);
    }
    if let Some(loc) = gl.get_uniform_location(program, "u_frame") {
        gl.uniform_1_i32(Some(&loc), frame.frame);
    }
}
