// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Icon composition.

Operates on SVG text only, so any SVG document can be used as an input,
not only the one produced by [`transcode`](crate::transcode).
*/

use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;

use xmlwriter::XmlWriter;

use crate::writer::{format_num, XmlWriterExt, SVG_NS, XLINK_NS};
use crate::{Error, Options, WriteOptions};

/// An ID prefix for foreground layers.
///
/// See [`merge_with`].
pub const FOREGROUND_ID_PREFIX: &str = "fg-";

/// An ID prefix for background layers.
///
/// See [`merge_with`].
pub const BACKGROUND_ID_PREFIX: &str = "bg-";

/// Composition options.
#[derive(Clone, Debug)]
pub struct ComposeOptions {
    /// Output canvas size. Both width and height.
    ///
    /// Default: 432
    pub canvas_size: f64,

    /// A part of the canvas the foreground will be fitted into.
    ///
    /// Default: 0.8
    pub containment_ratio: f64,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        ComposeOptions {
            canvas_size: 432.0,
            containment_ratio: 0.8,
        }
    }
}

/// An icon layer source.
#[derive(Clone, PartialEq, Debug)]
pub enum Source {
    /// A VectorDrawable file.
    File(PathBuf),
    /// A solid color, like `#112233`. Used as is.
    Solid(String),
}

impl Source {
    /// Produces an SVG document for this source.
    pub fn to_svg(
        &self,
        opt: &Options,
        wopt: &WriteOptions,
        copt: &ComposeOptions,
    ) -> Result<String, Error> {
        match self {
            Source::File(ref path) => crate::transcode(path, None, opt, wopt),
            Source::Solid(ref color) => Ok(synthesize_solid_with(color, copt)),
        }
    }
}

/// Draws `foreground` over `background` using the default options.
///
/// See [`merge_with`] for details.
pub fn merge(foreground: &str, background: &str) -> String {
    merge_with(foreground, background, &ComposeOptions::default())
}

/// Draws `foreground` over `background`.
///
/// The background is drawn as is, while the foreground's viewBox is scaled
/// and centered to fit the `containment_ratio` part of the canvas.
///
/// Both documents are embedded as is, so their IDs must not collide.
/// Documents produced by [`transcode`](crate::transcode) always start from `g1` and `c1`,
/// therefore layers must be converted with distinct [`WriteOptions::id_prefix`] values,
/// like [`FOREGROUND_ID_PREFIX`] and [`BACKGROUND_ID_PREFIX`].
/// IDs defined by both layers are reported as warnings.
///
/// Never fails. Text without an `svg` element is used as content as is,
/// and a foreground without a valid `viewBox` is assumed to have
/// a canvas-sized one.
pub fn merge_with(foreground: &str, background: &str, opt: &ComposeOptions) -> String {
    let fg = split_root(foreground);
    let bg = split_root(background);

    for id in shared_ids(fg.content, bg.content) {
        log::warn!(
            "Both layers define the '{}' ID. Layers must use distinct ID prefixes.",
            id
        );
    }

    let view_box = fg
        .open_tag
        .and_then(parse_view_box)
        .unwrap_or(svgtypes::ViewBox {
            x: 0.0,
            y: 0.0,
            w: opt.canvas_size,
            h: opt.canvas_size,
        });

    let inner_size = opt.canvas_size * opt.containment_ratio;
    let sx = inner_size / view_box.w;
    let sy = inner_size / view_box.h;
    let tx = (opt.canvas_size - inner_size) / 2.0 - view_box.x * sx;
    let ty = (opt.canvas_size - inner_size) / 2.0 - view_box.y * sy;

    let size = format_num(opt.canvas_size, 8);

    let mut svg = String::with_capacity(foreground.len() + background.len() + 256);
    svg.push_str(&format!(
        "<svg xmlns=\"{}\" xmlns:xlink=\"{}\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">",
        SVG_NS, XLINK_NS,
    ));
    svg.push_str(bg.content);
    svg.push_str(&format!(
        "<g transform=\"translate({},{}) scale({},{})\">",
        format_num(tx, 8),
        format_num(ty, 8),
        format_num(sx, 8),
        format_num(sy, 8),
    ));
    svg.push_str(fg.content);
    svg.push_str("</g></svg>");
    svg
}

/// Creates a canvas-sized SVG document filled with `color`.
pub fn synthesize_solid(color: &str) -> String {
    synthesize_solid_with(color, &ComposeOptions::default())
}

/// Creates a canvas-sized SVG document filled with `color`.
///
/// The color is not validated and is written as is.
pub fn synthesize_solid_with(color: &str, opt: &ComposeOptions) -> String {
    let precision = 8;
    let size = opt.canvas_size as f32;

    let mut xml = XmlWriter::new(WriteOptions::default().xml_options());
    xml.start_element("svg");
    xml.write_attribute("xmlns", SVG_NS);
    xml.write_attribute("xmlns:xlink", XLINK_NS);
    xml.write_num_attribute("width", size, precision);
    xml.write_num_attribute("height", size, precision);
    xml.write_attribute_fmt(
        "viewBox",
        format_args!("0 0 {0} {0}", format_num(opt.canvas_size, precision)),
    );
    xml.start_element("rect");
    xml.write_num_attribute("width", size, precision);
    xml.write_num_attribute("height", size, precision);
    xml.write_attribute("fill", color);
    xml.end_document()
}

struct Split<'a> {
    open_tag: Option<&'a str>,
    content: &'a str,
}

/// Splits an SVG document into the root open tag and the root content.
fn split_root(text: &str) -> Split<'_> {
    let whole = Split {
        open_tag: None,
        content: text,
    };

    let start = match text.find("<svg") {
        Some(v) => v,
        None => return whole,
    };

    let end = match find_tag_end(&text[start..]) {
        Some(v) => start + v,
        None => return whole,
    };

    let open_tag = &text[start..=end];
    if open_tag.ends_with("/>") {
        return Split {
            open_tag: Some(open_tag),
            content: "",
        };
    }

    let content = &text[end + 1..];
    let content = match content.rfind("</svg>") {
        Some(idx) => &content[..idx],
        None => content,
    };

    Split {
        open_tag: Some(open_tag),
        content,
    }
}

/// Returns the position of the `>` that closes a tag, skipping quoted values.
fn find_tag_end(tag: &str) -> Option<usize> {
    let mut quote = None;
    for (idx, c) in tag.char_indices() {
        match (quote, c) {
            (None, '"') | (None, '\'') => quote = Some(c),
            (Some(q), _) if q == c => quote = None,
            (None, '>') => return Some(idx),
            _ => {}
        }
    }

    None
}

/// Returns IDs defined in both contents, sorted.
fn shared_ids<'a>(fg: &'a str, bg: &str) -> Vec<&'a str> {
    let bg_ids = element_ids(bg);
    let mut ids: Vec<_> = element_ids(fg)
        .into_iter()
        .filter(|id| bg_ids.contains(*id))
        .collect();
    ids.sort_unstable();
    ids
}

fn element_ids(content: &str) -> HashSet<&str> {
    let mut ids = HashSet::new();
    for (idx, _) in content.match_indices("id=") {
        // Must be a whole attribute name.
        if !content[..idx].ends_with(char::is_whitespace) {
            continue;
        }

        let value = &content[idx + 3..];
        let quote = match value.chars().next() {
            Some(c @ ('"' | '\'')) => c,
            _ => continue,
        };

        if let Some(end) = value[1..].find(quote) {
            ids.insert(&value[1..1 + end]);
        }
    }

    ids
}

fn parse_view_box(open_tag: &str) -> Option<svgtypes::ViewBox> {
    let value = attribute_value(open_tag, "viewBox")?;
    match svgtypes::ViewBox::from_str(value) {
        Ok(vb) if vb.w > 0.0 && vb.h > 0.0 && vb.x.is_finite() && vb.y.is_finite() => Some(vb),
        _ => {
            log::warn!("Invalid viewBox: '{}'. Using the canvas size.", value);
            None
        }
    }
}

fn attribute_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let mut rest = tag;
    while let Some(idx) = rest.find(name) {
        let before = rest[..idx].chars().next_back();
        rest = &rest[idx + name.len()..];

        // Must be a whole attribute name.
        if !before.map_or(false, char::is_whitespace) {
            continue;
        }

        let value = rest.trim_start();
        let value = match value.strip_prefix('=') {
            Some(v) => v.trim_start(),
            None => continue,
        };

        let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
        let value = &value[1..];
        let end = value.find(quote)?;
        return Some(&value[..end]);
    }

    None
}
