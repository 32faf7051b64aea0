use std::path::Path;

use iconset::{Catalog, Error, Options};

fn options() -> Options {
    Options {
        icons_dir: "tests/files/icons".into(),
        ..Options::default()
    }
}

fn load(name: &str) -> Result<Catalog, Error> {
    Catalog::load(Path::new(&format!("tests/files/{}", name)), &options())
}

#[test]
fn layers_are_deduplicated() {
    let catalog = load("icons.json").unwrap();

    let keys: Vec<_> = catalog.icons().map(|icon| icon.key.as_str()).collect();
    assert_eq!(keys, ["default", "night", "rocket", "white-rocket"]);

    let foregrounds: Vec<_> = catalog.foregrounds().map(|l| l.name.as_str()).collect();
    assert_eq!(foregrounds, ["firefox", "rocket"]);

    let backgrounds: Vec<_> = catalog.backgrounds().map(|l| l.name.as_str()).collect();
    assert_eq!(backgrounds, ["#112233", "#ffffff", "night"]);
}

#[test]
fn icon_defaults() {
    let catalog = load("icons.json").unwrap();

    let icon = catalog.icon("default").unwrap();
    assert_eq!(icon.alias_suffix, "Default");
    assert_eq!(icon.foreground, "firefox");
    assert_eq!(icon.background, "#ffffff");
    assert_eq!(icon.subtitle, None);

    let icon = catalog.icon("night").unwrap();
    assert_eq!(icon.subtitle.as_deref(), Some("Gradient background"));
}

#[test]
fn solid_background() {
    let catalog = load("icons.json").unwrap();
    let layer = catalog.background("#112233").unwrap();
    assert_eq!(layer.source, vd2svg::Source::Solid("#112233".to_string()));
    assert_eq!(layer.svg, vd2svg::synthesize_solid("#112233"));
}

#[test]
fn layer_ids_are_prefixed() {
    let catalog = load("icons.json").unwrap();

    let fg = &catalog.foreground("firefox").unwrap().svg;
    assert!(fg.contains(r#"<clipPath id="fg-c1">"#));
    assert!(fg.contains(r#"clip-path="url(#fg-c1)""#));

    let bg = &catalog.background("night").unwrap().svg;
    assert!(bg.contains(r#"<linearGradient id="bg-g1""#));
    assert!(bg.contains(r#"fill="url(#bg-g1)""#));
    assert!(bg.contains(r#"<clipPath id="bg-c1">"#));
}

#[test]
fn merged_icon() {
    let catalog = load("icons.json").unwrap();

    let svg = catalog.icon_svg("rocket").unwrap();
    assert!(svg.starts_with(
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="432" height="432" viewBox="0 0 432 432"><rect width="432" height="432" fill="#112233"/>"##
    ));
    assert!(svg.contains(r##"<g transform="translate(43.2,43.2) scale(6.912,6.912)"><defs/><path d="M25,5L40,45H10z" fill="#FFFFFF"/></g></svg>"##));
}

#[test]
fn merged_icon_has_no_id_collisions() {
    let catalog = load("icons.json").unwrap();

    let svg = catalog.icon_svg("night").unwrap();
    assert!(svg.contains("scale(3.456,3.456)"));
    assert!(svg.contains(r#"id="fg-c1""#));
    assert!(svg.contains(r#"id="bg-c1""#));
    assert!(!svg.contains(r#"id="c1""#));
    assert_eq!(svg.matches("<svg").count(), 1);
}

#[test]
fn missing_resources() {
    let catalog = load("icons.json").unwrap();

    assert!(catalog.has_icon("night"));
    assert!(catalog.has_foreground("rocket"));
    assert!(catalog.has_background("#ffffff"));
    assert!(!catalog.has_icon("firefox"));
    assert!(!catalog.has_foreground("night"));
    assert!(!catalog.has_background("#000000"));

    match catalog.icon_svg("unknown") {
        Err(Error::MissingResource { kind, name }) => {
            assert_eq!(kind, "icon");
            assert_eq!(name, "unknown");
        }
        _ => unreachable!(),
    }

    assert!(matches!(
        catalog.foreground("unknown"),
        Err(Error::MissingResource { kind: "foreground", .. })
    ));
    assert!(matches!(
        catalog.background("unknown"),
        Err(Error::MissingResource { kind: "background", .. })
    ));
}

#[test]
fn missing_layer_file() {
    match load("broken.json") {
        Err(Error::Convert { name, source }) => {
            assert_eq!(name, "not-exists");
            assert!(matches!(source, vd2svg::Error::Io(_)));
        }
        _ => unreachable!(),
    }
}

#[test]
fn invalid_background_color() {
    assert!(matches!(load("bad-color.json"), Err(Error::InvalidColor(ref c)) if c == "#fff"));
}

#[test]
fn invalid_json() {
    assert!(matches!(
        Catalog::from_str(r#"{"a": {"title": "no suffix"}}"#, &options()),
        Err(Error::Json(_))
    ));
    assert!(matches!(
        Catalog::from_str("[]", &options()),
        Err(Error::Json(_))
    ));
    assert!(matches!(load("not-exists.json"), Err(Error::Io(_))));
}
