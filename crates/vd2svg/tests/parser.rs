use vd2svg::{Color, Drawable, Node, Options, Paint, WriteOptions};

const ANDROID_NS: &str = r#"xmlns:android="http://schemas.android.com/apk/res/android""#;
const AAPT_NS: &str = r#"xmlns:aapt="http://schemas.android.com/aapt""#;

fn parse(body: &str, attrs: &str) -> Drawable {
    let text = format!("<vector {} {} {}>{}</vector>", ANDROID_NS, AAPT_NS, attrs, body);
    Drawable::from_str(&text, &Options::default()).unwrap()
}

fn to_svg(body: &str, attrs: &str) -> String {
    parse(body, attrs).to_string(&WriteOptions::default())
}

fn first_path(drawable: &Drawable) -> &vd2svg::Path {
    drawable
        .descendants()
        .find_map(|node| match node {
            Node::Path(ref path) => Some(path.as_ref()),
            _ => None,
        })
        .unwrap()
}

#[test]
fn default_size() {
    let drawable = parse("", "");
    assert_eq!(drawable.viewport_width, 438.0);
    assert_eq!(drawable.viewport_height, 438.0);
    assert!(drawable
        .to_string(&WriteOptions::default())
        .contains(r#"viewBox="0 0 438 438""#));
}

#[test]
fn custom_default_size() {
    let opt = Options { default_size: 108.0 };
    let drawable = Drawable::from_str("<vector/>", &opt).unwrap();
    assert_eq!(drawable.width, 108.0);
    assert_eq!(drawable.viewport_height, 108.0);
}

#[test]
fn size_from_width_and_height() {
    let drawable = parse("", r#"android:width="24dp" android:height="32dip""#);
    assert_eq!(drawable.width, 24.0);
    assert_eq!(drawable.height, 32.0);
    assert_eq!(drawable.viewport_width, 24.0);
    assert_eq!(drawable.viewport_height, 32.0);
}

#[test]
fn size_from_viewport() {
    let drawable = parse("", r#"android:viewportWidth="108" android:viewportHeight="54""#);
    assert_eq!(drawable.width, 108.0);
    assert_eq!(drawable.height, 54.0);
}

#[test]
fn unqualified_attributes() {
    let drawable = parse(r##"<path pathData="M1,2" fillColor="#00ff00"/>"##, r#"viewportWidth="10" viewportHeight="20""#);
    assert_eq!(drawable.viewport_width, 10.0);
    assert_eq!(drawable.viewport_height, 20.0);

    let path = first_path(&drawable);
    assert_eq!(path.data, "M1,2");
    match path.fill.as_ref().unwrap().paint {
        Paint::Color(ref c) => assert_eq!(*c, Color::new_rgb(0, 255, 0)),
        _ => unreachable!(),
    }
}

#[test]
fn path_data_is_copied() {
    let data = "M12,2C6.48,2 2,6.48 2,12s4.48,10 10,10 10,-4.48 10,-10S17.52,2 12,2z";
    let svg = to_svg(&format!(r#"<path android:pathData="{}"/>"#, data), "");
    assert!(svg.contains(&format!(r#"<path d="{}"/>"#, data)));
}

#[test]
fn solid_fill_has_no_opacity() {
    let svg = to_svg(r##"<path android:pathData="M0,0" android:fillColor="#112233"/>"##, "");
    assert!(svg.contains(r##"<path d="M0,0" fill="#112233"/>"##));
    assert!(!svg.contains("opacity"));
}

#[test]
fn stroke_alpha() {
    let svg = to_svg(
        r##"<path android:pathData="M0,0" android:strokeColor="#FFFFFF" android:strokeAlpha="0.25" android:strokeWidth="1.5" android:strokeLineJoin="bevel" android:strokeMiterLimit="3"/>"##,
        "",
    );
    assert!(svg.contains(
        r##"stroke="#FFFFFF" stroke-opacity="0.250" stroke-width="1.5" stroke-linejoin="bevel" stroke-miterlimit="3""##
    ));
}

#[test]
fn gradients_are_defined_before_use() {
    let gradient = |end: &str| {
        format!(
            r##"<path android:pathData="M0,0"><aapt:attr name="android:fillColor"><gradient android:endX="{}" android:startColor="#FF0000" android:endColor="#0000FF"/></aapt:attr></path>"##,
            end
        )
    };

    let body = format!("{}<group>{}</group>{}", gradient("1"), gradient("2"), gradient("1"));
    let svg = to_svg(&body, "");

    // Identical content, but different nodes.
    for id in ["g1", "g2", "g3"] {
        let def = svg.find(&format!(r#"<linearGradient id="{}""#, id)).unwrap();
        let usage = svg.find(&format!("url(#{})", id)).unwrap();
        assert!(def < usage);
    }

    assert_eq!(svg.matches("<linearGradient ").count(), 3);
    assert_eq!(svg.matches("url(#g").count(), 3);
    assert!(!svg.contains("g4"));
}

#[test]
fn short_gradient_form() {
    let body = r##"<path android:pathData="M0,0"><aapt:attr name="android:fillColor"><gradient android:startColor="#80FF0000" android:centerColor="#00FF00" android:endColor="#0000FF"/></aapt:attr></path>"##;
    let svg = to_svg(body, "");
    assert!(svg.contains(
        r##"<stop offset="0" stop-color="#FF0000" stop-opacity="0.502"/><stop offset="0.5" stop-color="#00FF00" stop-opacity="1.000"/><stop offset="1" stop-color="#0000FF" stop-opacity="1.000"/>"##
    ));
}

#[test]
fn standalone_gradients_go_last() {
    let body = r##"<gradient android:startColor="#000"/><path android:pathData="M0,0"><aapt:attr name="android:fillColor"><gradient android:startColor="#fff"/></aapt:attr></path>"##;
    let drawable = parse(body, "");
    assert_eq!(drawable.linear_gradients.len(), 2);
    assert_eq!(drawable.linear_gradients[0].id, "g1");
    assert_eq!(drawable.linear_gradients[0].stops[0].color, Color::new_rgb(255, 255, 255));
    assert_eq!(drawable.linear_gradients[1].id, "g2");
    assert_eq!(drawable.linear_gradients[1].stops[0].color, Color::black());

    match first_path(&drawable).fill.as_ref().unwrap().paint {
        Paint::LinearGradient(ref lg) => assert_eq!(lg.id, "g1"),
        _ => unreachable!(),
    }
}

#[test]
fn radial_gradient_is_skipped() {
    let body = r##"<path android:pathData="M0,0" android:fillColor="#FF00FF00"><aapt:attr name="android:fillColor"><gradient android:type="radial" android:gradientRadius="10" android:startColor="#000"/></aapt:attr></path>"##;
    let svg = to_svg(body, "");
    assert!(svg.contains("<defs/>"));
    assert!(svg.contains(r##"fill="#00FF00""##));
    assert!(!svg.contains("url(#"));
}

#[test]
fn non_fill_gradients_are_not_applied() {
    let body = r##"<path android:pathData="M0,0" android:strokeColor="#000"><aapt:attr name="android:strokeColor"><gradient android:startColor="#fff"/></aapt:attr></path>"##;
    let svg = to_svg(body, "");
    // Still defined, but not used.
    assert!(svg.contains(r#"<linearGradient id="g1""#));
    assert!(!svg.contains("url(#g1)"));
}

#[test]
fn clip_paths_get_unique_ids() {
    let body = r#"<group><clip-path android:pathData="M0,0h1v1z"/><path android:pathData="M0,0"/></group><group><clip-path android:pathData="M0,0h1v1z"/><path android:pathData="M1,1"/></group>"#;
    let drawable = parse(body, "");
    let ids: Vec<_> = drawable.clip_paths.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["c1", "c2"]);
}

#[test]
fn root_clip_path() {
    let svg = to_svg(
        r#"<clip-path android:pathData="M0,0h5v5z"/><path android:pathData="M0,0"/>"#,
        "",
    );
    assert!(svg.ends_with(r#"<g clip-path="url(#c1)"><path d="M0,0"/></g></svg>"#));
}

#[test]
fn empty_group_is_kept() {
    let svg = to_svg("<group/>", "");
    assert!(svg.ends_with("<defs/><g/></svg>"));
}

#[test]
fn group_rotation() {
    let drawable = parse(r#"<group android:rotation="90" android:pivotX="5" android:pivotY="5"/>"#, "");
    match drawable.root.children[0] {
        Node::Group(ref g) => {
            let (x, y) = map_point(g.transform, 0.0, 0.0);
            assert!((x - 10.0).abs() < 1e-4);
            assert!(y.abs() < 1e-4);
        }
        _ => unreachable!(),
    }
}

#[test]
fn group_pivot_is_not_applied_to_translation() {
    let drawable = parse(
        r#"<group android:translateX="3" android:pivotX="50" android:pivotY="50"/>"#,
        "",
    );
    match drawable.root.children[0] {
        Node::Group(ref g) => assert_eq!(map_point(g.transform, 1.0, 1.0), (4.0, 1.0)),
        _ => unreachable!(),
    }
}

#[test]
fn unknown_elements_are_inlined() {
    let svg = to_svg(r#"<foo><path android:pathData="M0,0"/></foo>"#, "");
    assert!(svg.ends_with(r#"<defs/><path d="M0,0"/></svg>"#));
}

#[test]
fn foreign_root() {
    let drawable = Drawable::from_str(
        r#"<animated-vector><path pathData="M0,0"/></animated-vector>"#,
        &Options::default(),
    )
    .unwrap();
    assert_eq!(drawable.descendants().count(), 1);
}

#[test]
fn malformed_input() {
    let err = Drawable::from_str("not an xml <", &Options::default()).unwrap_err();
    assert!(err.is_malformed_input());

    let err = Drawable::from_data(&[0xff, 0xfe, 0x00], &Options::default()).unwrap_err();
    assert!(err.is_malformed_input());

    let err = vd2svg::transcode_str("<vector>", &Options::default(), &WriteOptions::default())
        .unwrap_err();
    assert!(matches!(err, vd2svg::Error::ParsingFailed(_)));
}

#[test]
fn deep_nesting_is_rejected() {
    let text = format!("{}{}", "<group>".repeat(2000), "</group>".repeat(2000));
    let err = Drawable::from_str(&text, &Options::default()).unwrap_err();
    assert!(err.is_malformed_input());
}

#[test]
fn many_clip_paths_are_rejected() {
    let clip = r#"<clip-path android:pathData="M0,0h1v1z"/>"#;
    let body = format!("<group>{}<path android:pathData=\"M0,0\"/></group>", clip.repeat(20000));
    let text = format!("<vector {}>{}</vector>", ANDROID_NS, body);
    let err = Drawable::from_str(&text, &Options::default()).unwrap_err();
    assert!(matches!(
        err,
        vd2svg::Error::ParsingFailed(vd2svg::roxmltree::Error::NodesLimitReached)
    ));
}

#[test]
fn clip_paths_count_towards_depth() {
    let clips = r#"<clip-path android:pathData="M0,0h1v1z"/>"#.repeat(10);
    let inner = format!("<group>{}<path android:pathData=\"M0,0\"/></group>", clips);

    let nested = |n: usize| {
        let text = format!(
            "<vector {}>{}{}{}</vector>",
            ANDROID_NS,
            "<group>".repeat(n),
            inner,
            "</group>".repeat(n)
        );
        Drawable::from_str(&text, &Options::default())
    };

    // The path ends up 1010 levels deep.
    assert!(nested(999).is_ok());

    // Parsable, but the path would be 1026 levels deep.
    let err = nested(1015).unwrap_err();
    assert!(err.is_malformed_input());
}

#[test]
fn infinite_viewport_is_ignored() {
    let drawable = parse(
        "",
        r#"android:width="24dp" android:viewportWidth="1e39" android:viewportHeight="-5""#,
    );
    assert_eq!(drawable.viewport_width, 24.0);
    assert_eq!(drawable.viewport_height, 438.0);
    assert!(drawable.to_string(&WriteOptions::default()).contains(r#"viewBox="0 0 24 438""#));
}

fn map_point(ts: vd2svg::Transform, x: f32, y: f32) -> (f32, f32) {
    (
        ts.sx * x + ts.kx * y + ts.tx,
        ts.ky * x + ts.sy * y + ts.ty,
    )
}
