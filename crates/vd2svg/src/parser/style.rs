// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::converter::Cache;
use super::paint_server;
use super::vdtree::{AId, VdNode};
use crate::*;

pub(crate) fn convert_path(node: VdNode, cache: &Cache) -> Path {
    let data: &str = node.attribute(AId::PathData).unwrap_or_default();

    Path {
        data: data.to_string(),
        fill: resolve_fill(node, cache),
        stroke: resolve_stroke(node),
    }
}

fn resolve_fill(node: VdNode, cache: &Cache) -> Option<Fill> {
    let alpha = node.attribute(AId::FillAlpha).unwrap_or(Opacity::ONE);
    let fill_type: Option<&str> = node.attribute(AId::FillType);
    let rule = match fill_type {
        Some("evenOdd") => FillRule::EvenOdd,
        _ => FillRule::NonZero,
    };

    if let Some(gradient) = paint_server::fill_gradient(node, cache) {
        return Some(Fill {
            paint: Paint::LinearGradient(gradient),
            opacity: alpha,
            rule,
        });
    }

    let color: &str = node.attribute(AId::FillColor)?;
    let (color, opacity) = color::normalize(color)?;
    Some(Fill {
        paint: Paint::Color(color),
        opacity: multiply(opacity, alpha),
        rule,
    })
}

fn resolve_stroke(node: VdNode) -> Option<Stroke> {
    let alpha = node.attribute(AId::StrokeAlpha).unwrap_or(Opacity::ONE);
    let color: Option<&str> = node.attribute(AId::StrokeColor);
    let color = color
        .and_then(color::normalize)
        .map(|(color, opacity)| (color, multiply(opacity, alpha)));
    let width: Option<f32> = node.attribute(AId::StrokeWidth);

    if color.is_none() && width.is_none() {
        return None;
    }

    let linecap: Option<&str> = node.attribute(AId::StrokeLineCap);
    let linecap = match linecap {
        Some("butt") => Some(LineCap::Butt),
        Some("round") => Some(LineCap::Round),
        Some("square") => Some(LineCap::Square),
        _ => None,
    };

    let linejoin: Option<&str> = node.attribute(AId::StrokeLineJoin);
    let linejoin = match linejoin {
        Some("miter") => Some(LineJoin::Miter),
        Some("round") => Some(LineJoin::Round),
        Some("bevel") => Some(LineJoin::Bevel),
        _ => None,
    };

    Some(Stroke {
        color,
        width,
        linecap,
        linejoin,
        miterlimit: node.attribute(AId::StrokeMiterLimit),
    })
}

#[inline]
fn multiply(a: Opacity, b: Opacity) -> Opacity {
    Opacity::new_clamped(a.get() * b.get())
}
