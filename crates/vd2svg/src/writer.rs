// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use xmlwriter::XmlWriter;

use crate::*;

pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub(crate) const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

impl Drawable {
    /// Writes `Drawable` as an SVG document.
    pub fn to_string(&self, opt: &WriteOptions) -> String {
        convert(self, opt)
    }
}

/// XML writing options.
#[derive(Clone, Debug)]
pub struct WriteOptions {
    /// Used to add a custom prefix to each element ID during writing.
    ///
    /// Useful when several converted documents will be merged into one.
    pub id_prefix: Option<String>,

    /// Set the coordinates numeric precision.
    ///
    /// Path data is never affected, since it's copied as is.
    ///
    /// Default: 8
    pub coordinates_precision: u8,

    /// Set the transform values numeric precision.
    ///
    /// Default: 8
    pub transforms_precision: u8,

    /// Use single quote marks instead of double quote.
    ///
    /// Default: disabled
    pub use_single_quote: bool,

    /// Set XML nodes indention.
    ///
    /// Default: `None`
    pub indent: xmlwriter::Indent,

    /// Set XML attributes indention.
    ///
    /// Default: `None`
    pub attributes_indent: xmlwriter::Indent,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            id_prefix: Default::default(),
            coordinates_precision: 8,
            transforms_precision: 8,
            use_single_quote: false,
            indent: xmlwriter::Indent::None,
            attributes_indent: xmlwriter::Indent::None,
        }
    }
}

impl WriteOptions {
    pub(crate) fn xml_options(&self) -> xmlwriter::Options {
        xmlwriter::Options {
            use_single_quote: self.use_single_quote,
            indent: self.indent,
            attributes_indent: self.attributes_indent,
        }
    }
}

pub(crate) fn convert(drawable: &Drawable, opt: &WriteOptions) -> String {
    let mut xml = XmlWriter::new(opt.xml_options());

    xml.start_element("svg");
    xml.write_num_attribute("width", drawable.width, opt.coordinates_precision);
    xml.write_num_attribute("height", drawable.height, opt.coordinates_precision);
    xml.write_attribute_raw("viewBox", |buf| {
        buf.extend_from_slice(b"0 0 ");
        write_num(drawable.viewport_width as f64, buf, opt.coordinates_precision);
        buf.push(b' ');
        write_num(drawable.viewport_height as f64, buf, opt.coordinates_precision);
    });
    xml.write_attribute("xmlns", SVG_NS);
    xml.write_attribute("xmlns:xlink", XLINK_NS);

    xml.start_element("defs");
    write_defs(drawable, opt, &mut xml);
    xml.end_element();

    if drawable.root.is_plain() {
        write_elements(&drawable.root, opt, &mut xml);
    } else {
        write_group_element(&drawable.root, opt, &mut xml);
    }

    xml.end_document()
}

fn write_defs(drawable: &Drawable, opt: &WriteOptions, xml: &mut XmlWriter) {
    for lg in &drawable.linear_gradients {
        xml.start_element("linearGradient");
        xml.write_id_attribute(&lg.id, opt);
        xml.write_attribute("gradientUnits", "userSpaceOnUse");
        xml.write_num_attribute("x1", lg.x1, opt.coordinates_precision);
        xml.write_num_attribute("y1", lg.y1, opt.coordinates_precision);
        xml.write_num_attribute("x2", lg.x2, opt.coordinates_precision);
        xml.write_num_attribute("y2", lg.y2, opt.coordinates_precision);

        for stop in &lg.stops {
            xml.start_element("stop");
            xml.write_num_attribute("offset", stop.offset, opt.coordinates_precision);
            xml.write_color("stop-color", &stop.color);
            // Always written, unlike fill and stroke opacity.
            xml.write_attribute("stop-opacity", &format_opacity(stop.opacity));
            xml.end_element();
        }

        xml.end_element();
    }

    for clip in &drawable.clip_paths {
        xml.start_element("clipPath");
        xml.write_id_attribute(&clip.id, opt);
        xml.start_element("path");
        xml.write_attribute("d", &clip.data);
        xml.end_element();
        xml.end_element();
    }
}

fn write_elements(parent: &Group, opt: &WriteOptions, xml: &mut XmlWriter) {
    for node in &parent.children {
        match node {
            Node::Group(ref g) => write_group_element(g, opt, xml),
            Node::Path(ref path) => write_path(path, opt, xml),
        }
    }
}

fn write_group_element(g: &Group, opt: &WriteOptions, xml: &mut XmlWriter) {
    xml.start_element("g");

    xml.write_transform("transform", g.transform, opt);

    if let Some(ref clip) = g.clip_path {
        xml.write_func_iri("clip-path", &clip.id, opt);
    }

    xml.write_opacity("opacity", g.opacity);

    write_elements(g, opt, xml);

    xml.end_element();
}

fn write_path(path: &Path, opt: &WriteOptions, xml: &mut XmlWriter) {
    xml.start_element("path");
    xml.write_attribute("d", &path.data);

    if let Some(ref fill) = path.fill {
        match fill.paint {
            Paint::Color(ref c) => xml.write_color("fill", c),
            Paint::LinearGradient(ref lg) => xml.write_func_iri("fill", &lg.id, opt),
        }

        xml.write_opacity("fill-opacity", fill.opacity);

        if fill.rule == FillRule::EvenOdd {
            xml.write_attribute("fill-rule", "evenodd");
        }
    }

    if let Some(ref stroke) = path.stroke {
        if let Some((ref c, opacity)) = stroke.color {
            xml.write_color("stroke", c);
            xml.write_opacity("stroke-opacity", opacity);
        }

        if let Some(width) = stroke.width {
            xml.write_num_attribute("stroke-width", width, opt.coordinates_precision);
        }

        if let Some(linecap) = stroke.linecap {
            xml.write_attribute(
                "stroke-linecap",
                match linecap {
                    LineCap::Butt => "butt",
                    LineCap::Round => "round",
                    LineCap::Square => "square",
                },
            );
        }

        if let Some(linejoin) = stroke.linejoin {
            xml.write_attribute(
                "stroke-linejoin",
                match linejoin {
                    LineJoin::Miter => "miter",
                    LineJoin::Round => "round",
                    LineJoin::Bevel => "bevel",
                },
            );
        }

        if let Some(miterlimit) = stroke.miterlimit {
            xml.write_num_attribute("stroke-miterlimit", miterlimit, opt.coordinates_precision);
        }
    }

    xml.end_element();
}

pub(crate) trait XmlWriterExt {
    fn write_id_attribute(&mut self, id: &str, opt: &WriteOptions);
    fn write_func_iri(&mut self, name: &str, id: &str, opt: &WriteOptions);
    fn write_color(&mut self, name: &str, color: &Color);
    fn write_opacity(&mut self, name: &str, opacity: Opacity);
    fn write_num_attribute(&mut self, name: &str, num: f32, precision: u8);
    fn write_transform(&mut self, name: &str, ts: Transform, opt: &WriteOptions);
}

impl XmlWriterExt for XmlWriter {
    #[inline(never)]
    fn write_id_attribute(&mut self, id: &str, opt: &WriteOptions) {
        debug_assert!(!id.is_empty());

        if let Some(ref prefix) = opt.id_prefix {
            let full_id = format!("{}{}", prefix, id);
            self.write_attribute("id", &full_id);
        } else {
            self.write_attribute("id", id);
        }
    }

    fn write_func_iri(&mut self, name: &str, id: &str, opt: &WriteOptions) {
        debug_assert!(!id.is_empty());
        let prefix = opt.id_prefix.as_deref().unwrap_or_default();
        self.write_attribute_fmt(name, format_args!("url(#{}{})", prefix, id));
    }

    fn write_color(&mut self, name: &str, color: &Color) {
        match *color {
            Color::Hex(ref s) | Color::Reference(ref s) => self.write_attribute(name, s),
        }
    }

    /// Writes an opacity with 3 decimal digits.
    ///
    /// Nothing is written when the rounded value is `1.000`.
    fn write_opacity(&mut self, name: &str, opacity: Opacity) {
        let text = format_opacity(opacity);
        if text != "1.000" {
            self.write_attribute(name, &text);
        }
    }

    fn write_num_attribute(&mut self, name: &str, num: f32, precision: u8) {
        self.write_attribute_raw(name, |buf| write_num(num as f64, buf, precision));
    }

    fn write_transform(&mut self, name: &str, ts: Transform, opt: &WriteOptions) {
        if !ts.is_identity() {
            self.write_attribute_raw(name, |buf| {
                buf.extend_from_slice(b"matrix(");
                write_num(ts.sx as f64, buf, opt.transforms_precision);
                buf.push(b' ');
                write_num(ts.ky as f64, buf, opt.transforms_precision);
                buf.push(b' ');
                write_num(ts.kx as f64, buf, opt.transforms_precision);
                buf.push(b' ');
                write_num(ts.sy as f64, buf, opt.transforms_precision);
                buf.push(b' ');
                write_num(ts.tx as f64, buf, opt.transforms_precision);
                buf.push(b' ');
                write_num(ts.ty as f64, buf, opt.transforms_precision);
                buf.extend_from_slice(b")");
            });
        }
    }
}

static POW_VEC: &[f64] = &[
    1.0,
    10.0,
    100.0,
    1_000.0,
    10_000.0,
    100_000.0,
    1_000_000.0,
    10_000_000.0,
    100_000_000.0,
];

pub(crate) fn write_num(num: f64, buf: &mut Vec<u8>, precision: u8) {
    // If number is an integer, it's faster to write it as i64.
    if num.fract() == 0.0 && num.abs() < i64::MAX as f64 {
        write!(buf, "{}", num as i64).unwrap();
        return;
    }

    // Round numbers up to the specified precision to prevent writing
    // ugly numbers like 29.999999999999996.
    let precision = POW_VEC[(precision as usize).min(POW_VEC.len() - 1)];
    let v = (num * precision).round() / precision;

    write!(buf, "{}", v).unwrap();
}

/// Formats a number the same way it will be written into an attribute.
pub(crate) fn format_num(num: f64, precision: u8) -> String {
    let mut buf = Vec::new();
    write_num(num, &mut buf, precision);
    // `write_num` produces only ASCII.
    String::from_utf8(buf).unwrap_or_default()
}

fn format_opacity(opacity: Opacity) -> String {
    format!("{:.3}", opacity.get())
}
