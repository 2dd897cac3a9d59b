//! Vertex/fragment source assembly.
//!
//! Fragment layout: `#version`, the define block, the dialect header, `#line 1`, then the
//! user code verbatim so driver diagnostics point at the user's own line numbers.

use crate::{Defines, Dialect, FragmentCode, GlslVersion};

const LEGACY_VERTEX_DECLS: &str = r#"
#ifdef GL_ES
precision highp float;
#endif

attribute vec2 a_position;
varying vec2 v_texcoord;
"#;

const MODERN_VERTEX_DECLS: &str = r#"
in vec2 a_position;
out vec2 v_texcoord;
"#;

const VERTEX_BODY: &str = r#"
void main() {
    v_texcoord = a_position * 0.5 + 0.5;
    gl_Position = vec4(a_position, 0.0, 1.0);
}
"#;

pub const PLAIN_HEADER: &str = r#"
#if __VERSION__ >= 130
out vec4 fragColor;
#define gl_FragColor fragColor
#define texture2D(TEX, UV) texture(TEX, UV)
#else
#extension GL_EXT_texture_array : enable
#endif
#ifdef GL_ES
precision mediump float;
#endif
"#;

pub const SHADERTOY_HEADER: &str = r#"
out vec4 fragColor;

#ifdef U_TEX0_TYPE
uniform U_TEX0_TYPE u_tex0;
#define iChannel0 u_tex0
#endif

#ifdef U_TEX1_TYPE
uniform U_TEX1_TYPE u_tex1;
#define iChannel1 u_tex1
#endif

#ifdef U_TEX2_TYPE
uniform U_TEX2_TYPE u_tex2;
#define iChannel2 u_tex2
#endif

#ifdef U_TEX3_TYPE
uniform U_TEX3_TYPE u_tex3;
#define iChannel3 u_tex3
#endif

uniform vec4    u_date;
#define iDate   u_date

uniform vec2    u_resolution;
#define iResolution u_resolution

#define iMouse  vec4(0.0)

uniform float   u_time;
#define iTime   u_time

uniform float   u_delta;
#define iTimeDelta u_delta

uniform float   u_fps;

uniform int     u_frame;
#define iFrame  u_frame

void mainImage( out vec4 fragColor, in vec2 fragCoord );

void main() {
    vec4 color = vec4(0.0, 0.0, 0.0, 1.0);
    vec2 st = gl_FragCoord.xy;
    mainImage(color, st);
    fragColor = color;
}
"#;

/// Header wrapped around user code for each dialect.
pub fn header_for(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Plain => PLAIN_HEADER,
        Dialect::Shadertoy => SHADERTOY_HEADER,
    }
}

fn version_line(version: GlslVersion) -> String {
    format!("#version {version}\n")
}

/// Billboard vertex shader: ±1 positions in, `[0, 1]` texcoords out.
pub fn vertex_shader(version: GlslVersion) -> String {
    let mut out = version_line(version);
    out.push_str(if version.is_legacy() {
        LEGACY_VERTEX_DECLS
    } else {
        MODERN_VERTEX_DECLS
    });
    out.push_str(VERTEX_BODY);
    out
}

pub fn fragment_shader(code: &FragmentCode, defines: &Defines) -> String {
    let header = header_for(code.dialect);
    let defs = defines.render();

    let mut out = version_line(code.version);
    out.reserve(defs.len() + header.len() + code.src.len() + 16);
    out.push_str(&defs);
    out.push_str(header);
    out.push_str("\n#line 1\n");
    out.push_str(&code.src);
    out
}
