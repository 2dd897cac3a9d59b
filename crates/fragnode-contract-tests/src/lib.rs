#![forbid(unsafe_code)]

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use fragnode_source::{
        fragment_shader, load_uniforms, plan_textures, resolve_includes, vertex_shader, Defines,
        Dialect, FragmentCode, GlslVersion, ImageFrame, ImageStack, IncludeConfig, IncludeError,
        InputValue, Inputs, PassConfig, PixelFormat, SourceError, UniformValue, Uniforms,
    };

    // ---- Golden fixtures ----
    const PASS_SHADERTOY_JSON: &str = include_str!("../fixtures/pass_shadertoy.json");
    const PASS_PLAIN_LEGACY_JSON: &str = include_str!("../fixtures/pass_plain_legacy.json");
    const PASS_BAD_VERSION_JSON: &str = include_str!("../fixtures/pass_bad_version.json");
    const PASS_UNKNOWN_FIELD_JSON: &str = include_str!("../fixtures/pass_unknown_field.json");
    const SHADERTOY_FRAGMENT_GOLDEN: &str =
        include_str!("../fixtures/shadertoy_fragment.golden.glsl");
    const VERTEX_330_GOLDEN: &str = include_str!("../fixtures/vertex_330.golden.glsl");

    fn write_temp_fixture(name: &str, contents: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        p.push(format!("fragnode_contract_tests_{name}_{ts}.json"));
        fs::write(&p, contents).expect("write fixture");
        p
    }

    fn image(w: u32, h: u32) -> InputValue {
        InputValue::Image(
            ImageFrame::new(w, h, PixelFormat::Rgba, vec![0.5; (w * h * 4) as usize]).unwrap(),
        )
    }

    fn image_array(w: u32, h: u32, frames: usize) -> InputValue {
        InputValue::ImageArray(
            ImageStack::new(
                w,
                h,
                PixelFormat::Rgb,
                vec![vec![0.0; (w * h * 3) as usize]; frames],
            )
            .unwrap(),
        )
    }

    #[test]
    fn golden_shadertoy_pass_assembles_byte_for_byte() {
        let path = write_temp_fixture("pass_shadertoy", PASS_SHADERTOY_JSON);
        let mut pass = PassConfig::load(&path).expect("pass_shadertoy.json should load");

        let mut inputs = Inputs::new();
        inputs.insert("u_tex0".into(), Some(image(8, 4)));
        let mut uniforms = Uniforms::new();
        plan_textures(&inputs, &mut uniforms, &mut pass.defines);

        assert_eq!(
            fragment_shader(&pass.code, &pass.defines),
            SHADERTOY_FRAGMENT_GOLDEN
        );
        assert_eq!(vertex_shader(pass.code.version), VERTEX_330_GOLDEN);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn golden_plain_legacy_pass_loads() {
        let path = write_temp_fixture("pass_plain_legacy", PASS_PLAIN_LEGACY_JSON);
        let pass = PassConfig::load(&path).expect("pass_plain_legacy.json should load");

        assert_eq!(pass.code.version, GlslVersion::V120);
        assert_eq!(pass.code.dialect, Dialect::Plain);
        assert!(!pass.resolve_includes);
        assert!(vertex_shader(pass.code.version).contains("attribute vec2 a_position;"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn golden_bad_version_is_rejected() {
        let path = write_temp_fixture("pass_bad_version", PASS_BAD_VERSION_JSON);
        let err = PassConfig::load(&path).expect_err("version 460 must be rejected");

        // Keep this stable but not overly strict.
        assert!(
            err.to_string().contains("460"),
            "expected error to name the version, got: {err}"
        );

        let _ = fs::remove_file(path);
    }

    #[test]
    fn golden_unknown_field_is_rejected() {
        let path = write_temp_fixture("pass_unknown_field", PASS_UNKNOWN_FIELD_JSON);
        let err = PassConfig::load(&path).expect_err("unknown key must be rejected");
        assert!(
            err.to_string().to_lowercase().contains("unknown field"),
            "unexpected err: {err}"
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn src_path_resolves_next_to_config() {
        let dir = std::env::temp_dir().join(format!(
            "fragnode_contract_src_path_{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("glow.frag"), "void main() { gl_FragColor = vec4(1.0); }\n").unwrap();
        fs::write(
            dir.join("pass.json"),
            r#"{ "version": "140", "src_path": "glow.frag" }"#,
        )
        .unwrap();

        let pass = PassConfig::load(dir.join("pass.json")).unwrap();
        assert!(pass.code.src.contains("gl_FragColor = vec4(1.0)"));

        fs::write(
            dir.join("missing.json"),
            r#"{ "version": "140", "src_path": "nope.frag" }"#,
        )
        .unwrap();
        let err = PassConfig::load(dir.join("missing.json")).unwrap_err();
        assert!(matches!(err, SourceError::Engine(_)), "got {err:?}");

        let _ = fs::remove_dir_all(dir);
    }

    // ---- Binding contracts ----

    #[test]
    fn single_frame_image_defines_sampler2d_only() {
        let mut inputs = Inputs::new();
        inputs.insert("foo".into(), Some(image(16, 9)));
        let mut uniforms = Uniforms::new();
        let mut defines = Defines::new();
        let bindings = plan_textures(&inputs, &mut uniforms, &mut defines);

        assert_eq!(bindings.len(), 1);
        assert_eq!(defines.iter().collect::<Vec<_>>(), [("FOO_TYPE", "sampler2D")]);
        assert!(!defines.contains("FOO_TOTALFRAMES"));
        assert_eq!(
            uniforms.get("fooResolution"),
            Some(&UniformValue::Vector(vec![16.0, 9.0]))
        );
        assert_eq!(uniforms.len(), 1);
    }

    #[test]
    fn five_frame_array_defines_array_sampler_and_frame_count() {
        let mut inputs = Inputs::new();
        inputs.insert("bar".into(), Some(image_array(4, 4, 5)));
        let mut uniforms = Uniforms::new();
        let mut defines = Defines::new();
        plan_textures(&inputs, &mut uniforms, &mut defines);

        assert_eq!(defines.get("BAR_TYPE"), Some("sampler2DArray"));
        assert_eq!(defines.get("BAR_TOTALFRAMES"), Some("5"));
        assert!(uniforms.contains_key("barResolution"));
        assert_eq!(
            uniforms.get("barTotalFrames"),
            Some(&UniformValue::Float(5.0))
        );
    }

    #[test]
    fn null_inputs_emit_nothing() {
        let mut inputs = Inputs::new();
        inputs.insert("u_tex0".into(), None);
        inputs.insert("amount".into(), None);
        let mut uniforms = Uniforms::new();
        let mut defines = Defines::new();

        let bindings = plan_textures(&inputs, &mut uniforms, &mut defines);
        load_uniforms(&inputs, &mut uniforms, &mut defines);

        assert!(bindings.is_empty());
        assert!(uniforms.is_empty());
        assert!(defines.is_empty());
    }

    #[test]
    fn textures_then_uniforms_share_one_define_block() {
        let mut inputs = Inputs::new();
        inputs.insert("u_tex0".into(), Some(image(2, 2)));
        inputs.insert("speed".into(), Some(InputValue::Scalar(2.0)));
        inputs.insert("u_tex1".into(), Some(image_array(2, 2, 3)));
        inputs.insert("offset".into(), Some(InputValue::Vector(vec![0.1, 0.2])));

        let mut uniforms = Uniforms::new();
        let mut defines = Defines::new();
        let bindings = plan_textures(&inputs, &mut uniforms, &mut defines);
        load_uniforms(&inputs, &mut uniforms, &mut defines);

        let units: Vec<_> = bindings.iter().map(|b| (b.unit, b.name.as_str())).collect();
        assert_eq!(units, [(0, "u_tex0"), (1, "u_tex1")]);

        let code = FragmentCode::new(
            GlslVersion::V330,
            Dialect::Shadertoy,
            "void mainImage(out vec4 c, in vec2 p) { c = vec4(speed); }",
        );
        let fs = fragment_shader(&code, &defines);
        let block: Vec<_> = fs.lines().skip(1).take(defines.len()).collect();
        assert_eq!(
            block,
            [
                "#define U_TEX0_TYPE sampler2D",
                "#define U_TEX1_TOTALFRAMES 3",
                "#define U_TEX1_TYPE sampler2DArray",
                "#define SPEED_TYPE float",
                "#define OFFSET_TYPE vec2",
            ]
        );
    }

    // ---- Include contracts ----

    #[test]
    fn include_free_text_only_gains_line_terminators() {
        let mut never = |url: &str| -> Result<String, IncludeError> { panic!("fetched {url}") };
        let src = "void main() {\n    gl_FragColor = vec4(1.0);\n}";
        let (out, _) = resolve_includes(src, &IncludeConfig::default(), &mut never);
        assert_eq!(out, format!("{src}\n"));
    }

    #[test]
    fn resolved_pass_still_assembles_when_an_include_fails() {
        let mut flaky = |url: &str| -> Result<String, IncludeError> {
            if url.contains("space") {
                Err(IncludeError::Transport {
                    url: url.to_string(),
                    msg: "connection refused".to_string(),
                })
            } else {
                Ok("#define PI 3.1415926535".to_string())
            }
        };
        let src = "#include \"lygia/math/const.glsl\"\n#include \"lygia/space/ratio.glsl\"\nvoid mainImage(out vec4 c, in vec2 p) { c = vec4(PI); }\n";
        let (resolved, report) = resolve_includes(src, &IncludeConfig::default(), &mut flaky);
        assert_eq!(report.fetched, ["https://lygia.xyz/math/const.glsl"]);
        assert_eq!(report.failed.len(), 1);

        let code = FragmentCode::new(GlslVersion::V330, Dialect::Shadertoy, resolved);
        let fs = fragment_shader(&code, &Defines::new());
        assert!(fs.contains("#line 1\n#define PI 3.1415926535\nvoid mainImage"));
    }
}

#[cfg(test)]
mod determinism;

#[cfg(test)]
mod properties;
