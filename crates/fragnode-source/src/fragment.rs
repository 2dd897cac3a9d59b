use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GlslVersion;

/// Authoring convention of the user's fragment code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Dialect {
    /// User code defines `main` and writes `gl_FragColor` (or `fragColor` on >= 130).
    #[default]
    Plain,
    /// User code defines `mainImage(out vec4, in vec2)`; built-ins use Shadertoy names.
    Shadertoy,
}

impl Dialect {
    /// Maps a host tag to a dialect. Only `"shadertoy"` is special; every other tag is plain.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("shadertoy") {
            Dialect::Shadertoy
        } else {
            Dialect::Plain
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Dialect::Plain => "plain",
            Dialect::Shadertoy => "shadertoy",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<String> for Dialect {
    fn from(tag: String) -> Self {
        Dialect::from_tag(&tag)
    }
}

impl From<Dialect> for String {
    fn from(d: Dialect) -> Self {
        d.tag().to_string()
    }
}

/// User fragment code plus what it needs to be wrapped correctly.
///
/// Treated as immutable for one compile pass; assembling the same value twice gives the
/// same source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentCode {
    pub version: GlslVersion,
    pub src: String,
    #[serde(default, alias = "specs")]
    pub dialect: Dialect,
}

impl FragmentCode {
    pub fn new(version: GlslVersion, dialect: Dialect, src: impl Into<String>) -> Self {
        Self {
            version,
            src: src.into(),
            dialect,
        }
    }

    /// Placeholder code for a node that has no user source yet.
    pub fn default_for(dialect: Dialect, version: GlslVersion) -> Self {
        let src = match dialect {
            Dialect::Plain => DEFAULT_FRAGMENT_SHADER,
            Dialect::Shadertoy => DEFAULT_SHADERTOY_SHADER,
        };
        Self::new(version, dialect, src)
    }
}

pub const DEFAULT_FRAGMENT_SHADER: &str = r#"
// <NAME>_TYPE holds the sampler/value type of each bound input, e.g.
//uniform U_TEX0_TYPE u_tex0;

uniform vec4    u_date;
uniform vec2    u_resolution;
uniform float   u_delta;
uniform float   u_time;
uniform float   u_fps;
uniform int     u_frame;

void main() {
    vec4 color = vec4(0.0, 0.0, 0.0, 1.0);
    vec2 pixel = 1.0 / u_resolution;
    vec2 st = gl_FragCoord.xy * pixel;

    color.rgb = vec3(st, 0.5 + 0.5 * cos(u_time));

    // texture arrays also define <NAME>_TOTALFRAMES
    //#ifdef U_TEX0_TOTALFRAMES
    //color = texture(u_tex0, vec3(st, float(u_frame)));
    //#else
    //color = texture(u_tex0, st);
    //#endif

    gl_FragColor = color;
}
"#;

pub const DEFAULT_SHADERTOY_SHADER: &str = r#"void mainImage( out vec4 fragColor, in vec2 fragCoord )
{
    vec2 uv = fragCoord/iResolution.xy;
    vec3 col = 0.5 + 0.5*cos(iTime+uv.xyx+vec3(0,2,4));
    fragColor = vec4(col,1.0);
}
"#;
