fn resave(name: &str) {
    resave_impl(name, None);
}

fn resave_with_prefix(name: &str, id_prefix: &str) {
    resave_impl(name, Some(id_prefix.to_string()));
}

fn resave_impl(name: &str, id_prefix: Option<String>) {
    let input = std::fs::read_to_string(format!("tests/files/{}.xml", name)).unwrap();

    let drawable = vd2svg::Drawable::from_str(&input, &vd2svg::Options::default()).unwrap();
    let mut xml_opt = vd2svg::WriteOptions::default();
    xml_opt.id_prefix = id_prefix;
    let output_svg = drawable.to_string(&xml_opt);

    let expected_svg =
        std::fs::read_to_string(format!("tests/files/{}-expected.svg", name)).unwrap();
    // Do not use `assert_eq` because it produces an unreadable output.
    assert!(output_svg == expected_svg.trim_end(), "{}", output_svg);
}

#[test]
fn path_fill_alpha() {
    resave("path-fill-alpha");
}

#[test]
fn gradient_inline() {
    resave("gradient-inline");
}

#[test]
fn group_transform_clip() {
    resave("group-transform-clip");
}

#[test]
fn root_alpha() {
    resave("root-alpha");
}

#[test]
fn multiple_clip_paths() {
    resave("multiple-clip-paths");
}

#[test]
fn id_prefix() {
    let input = std::fs::read_to_string("tests/files/multiple-clip-paths.xml").unwrap();
    let drawable = vd2svg::Drawable::from_str(&input, &vd2svg::Options::default()).unwrap();
    let xml_opt = vd2svg::WriteOptions {
        id_prefix: Some("fg-".to_string()),
        ..vd2svg::WriteOptions::default()
    };

    let svg = drawable.to_string(&xml_opt);
    assert!(svg.contains(r#"<clipPath id="fg-c1">"#));
    assert!(svg.contains(r#"<clipPath id="fg-c2">"#));
    assert!(svg.contains(r#"<g clip-path="url(#fg-c1)"><g clip-path="url(#fg-c2)">"#));
    assert!(!svg.contains(r#"id="c1""#));
}

#[test]
fn gradient_with_prefix() {
    let input = std::fs::read_to_string("tests/files/gradient-inline.xml").unwrap();
    let drawable = vd2svg::Drawable::from_str(&input, &vd2svg::Options::default()).unwrap();
    let xml_opt = vd2svg::WriteOptions {
        id_prefix: Some("bg-".to_string()),
        ..vd2svg::WriteOptions::default()
    };

    let svg = drawable.to_string(&xml_opt);
    assert!(svg.contains(r#"<linearGradient id="bg-g1""#));
    assert!(svg.contains(r#"fill="url(#bg-g1)""#));
}

#[test]
fn indent() {
    let input = std::fs::read_to_string("tests/files/path-fill-alpha.xml").unwrap();
    let drawable = vd2svg::Drawable::from_str(&input, &vd2svg::Options::default()).unwrap();
    let xml_opt = vd2svg::WriteOptions {
        indent: xmlwriter::Indent::Spaces(4),
        ..vd2svg::WriteOptions::default()
    };

    let svg = drawable.to_string(&xml_opt);
    assert!(svg.contains("\n    <path "));
}

#[test]
fn transcode_to_file() {
    let dir = std::env::temp_dir().join(format!("vd2svg-write-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let output = dir.join("out.svg");

    let svg = vd2svg::transcode(
        std::path::Path::new("tests/files/root-alpha.xml"),
        Some(&output),
        &vd2svg::Options::default(),
        &vd2svg::WriteOptions::default(),
    )
    .unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), svg);
    let expected = std::fs::read_to_string("tests/files/root-alpha-expected.svg").unwrap();
    assert_eq!(svg, expected.trim_end());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn transcode_missing_file() {
    let err = vd2svg::transcode(
        std::path::Path::new("tests/files/not-exists.xml"),
        None,
        &vd2svg::Options::default(),
        &vd2svg::WriteOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, vd2svg::Error::Io(_)));
    assert!(!err.is_malformed_input());
}

#[test]
fn merge_prefixed_layers() {
    let layer = |id_prefix: &str| {
        let xml_opt = vd2svg::WriteOptions {
            id_prefix: Some(id_prefix.to_string()),
            ..vd2svg::WriteOptions::default()
        };

        vd2svg::transcode(
            std::path::Path::new("tests/files/gradient-inline.xml"),
            None,
            &vd2svg::Options::default(),
            &xml_opt,
        )
        .unwrap()
    };

    let fg = layer(vd2svg::FOREGROUND_ID_PREFIX);
    let bg = layer(vd2svg::BACKGROUND_ID_PREFIX);
    let svg = vd2svg::merge(&fg, &bg);

    assert_eq!(svg.matches(r#"id="fg-g1""#).count(), 1);
    assert_eq!(svg.matches(r#"id="bg-g1""#).count(), 1);
    assert!(!svg.contains(r#"id="g1""#));

    // The foreground is drawn last and refers to its own gradient.
    let transform = svg.find("<g transform=").unwrap();
    assert!(svg[transform..].contains("url(#fg-g1)"));
    assert!(!svg[transform..].contains("url(#bg-g1)"));
}
