use proptest::prelude::*;

use fragnode_source::{
    fragment_shader, vertex_shader, Defines, Dialect, FragmentCode, GlslVersion,
};

fn any_version() -> impl Strategy<Value = GlslVersion> {
    proptest::sample::select(GlslVersion::ALL.to_vec())
}

fn any_dialect() -> impl Strategy<Value = Dialect> {
    prop_oneof![Just(Dialect::Plain), Just(Dialect::Shadertoy)]
}

proptest! {
    #[test]
    fn legacy_syntax_iff_100_or_120(version in any_version()) {
        let vs = vertex_shader(version);
        let legacy = matches!(version.as_str(), "100" | "120");
        prop_assert_eq!(vs.contains("attribute vec2 a_position;"), legacy);
        prop_assert_eq!(vs.contains("in vec2 a_position;"), !legacy);
    }

    #[test]
    fn defines_follow_version_in_input_order(
        version in any_version(),
        dialect in any_dialect(),
        names in proptest::collection::vec("[A-Z][A-Z0-9_]{0,8}", 0..8),
    ) {
        let mut defines = Defines::new();
        for (i, name) in names.iter().enumerate() {
            defines.set(name.clone(), i);
        }
        let code = FragmentCode::new(version, dialect, "// body\n");
        let fs = fragment_shader(&code, &defines);

        let mut lines = fs.lines();
        let expected_version = format!("#version {version}");
        prop_assert_eq!(lines.next(), Some(expected_version.as_str()));
        for (name, value) in defines.iter() {
            let expected = format!("#define {name} {value}");
            prop_assert_eq!(lines.next(), Some(expected.as_str()));
        }
        // Header starts right after the define block.
        prop_assert_eq!(lines.next(), Some(""));
        prop_assert!(fs.ends_with("#line 1\n// body\n"));
    }

    #[test]
    fn dialect_controls_main_image_harness(version in any_version(), dialect in any_dialect()) {
        let fs = fragment_shader(&FragmentCode::new(version, dialect, ""), &Defines::new());
        let shadertoy = dialect == Dialect::Shadertoy;
        let prototype = "void mainImage( out vec4 fragColor, in vec2 fragCoord );";
        prop_assert_eq!(fs.contains(prototype), shadertoy);
        prop_assert_eq!(fs.contains("mainImage(color, st);"), shadertoy);
        prop_assert_eq!(fs.contains("iResolution"), shadertoy);
        prop_assert_eq!(fs.contains("iTime"), shadertoy);
    }
}
