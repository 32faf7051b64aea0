// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::sync::Arc;

use super::converter::Cache;
use super::vdtree::{AId, Document, EId, VdNode};
use crate::{color, Color, LinearGradient, Opacity, Stop};

/// Converts all gradients in the document.
///
/// Gradients that are set as a path fill go first, followed by all the others.
/// Each gradient node is converted only once, so all references to it
/// will share the same ID.
pub(crate) fn collect_gradients(doc: &Document, cache: &mut Cache) {
    for node in doc.descendants() {
        if let Some(gradient) = inline_gradient(node, "fillColor") {
            convert(gradient, cache);
        }
    }

    for node in doc.descendants() {
        if node.tag_name() == Some(EId::Gradient) {
            convert(node, cache);
        }
    }
}

/// Returns a gradient set as a path fill via `aapt:attr`.
pub(crate) fn fill_gradient(node: VdNode, cache: &Cache) -> Option<Arc<LinearGradient>> {
    node.children()
        .filter_map(|child| inline_gradient(child, "fillColor"))
        .find_map(|gradient| cache.gradients.get(&gradient.id()).cloned().flatten())
}

/// Returns a gradient defined inside an `aapt:attr` with a name
/// that ends with `suffix`.
fn inline_gradient<'a, 'input: 'a>(
    node: VdNode<'a, 'input>,
    suffix: &str,
) -> Option<VdNode<'a, 'input>> {
    if node.tag_name() != Some(EId::Attr) {
        return None;
    }

    let name: &str = node.attribute(AId::Name)?;
    if !name.ends_with(suffix) {
        return None;
    }

    node.first_child_by_tag(EId::Gradient)
}

fn convert(node: VdNode, cache: &mut Cache) {
    if cache.gradients.contains_key(&node.id()) {
        return;
    }

    let kind: &str = node.attribute(AId::Type).unwrap_or("linear");
    if kind != "linear" {
        log::warn!("'{}' gradients are not supported. Skipped.", kind);
        cache.gradients.insert(node.id(), None);
        return;
    }

    let stops = convert_stops(node);
    if stops.is_empty() {
        log::warn!("Gradient has no stops.");
    }

    let gradient = Arc::new(LinearGradient {
        id: cache.gen_linear_gradient_id(),
        x1: node.attribute(AId::StartX).unwrap_or(0.0),
        y1: node.attribute(AId::StartY).unwrap_or(0.0),
        x2: node.attribute(AId::EndX).unwrap_or(0.0),
        y2: node.attribute(AId::EndY).unwrap_or(0.0),
        stops,
    });

    cache.linear_gradients.push(gradient.clone());
    cache.gradients.insert(node.id(), Some(gradient));
}

fn convert_stops(node: VdNode) -> Vec<Stop> {
    let stops: Vec<_> = node
        .children()
        .filter(|n| n.tag_name() == Some(EId::Item))
        .map(|item| {
            let color: &str = item.attribute(AId::Color).unwrap_or("#000000");
            let (color, opacity) = color::normalize(color).unwrap_or((Color::black(), Opacity::ONE));
            Stop {
                offset: item.attribute(AId::Offset).unwrap_or(0.0),
                color,
                opacity,
            }
        })
        .collect();

    if !stops.is_empty() {
        return stops;
    }

    // No items, so we have to use the short form.
    let mut stops = Vec::new();
    for (aid, offset) in [
        (AId::StartColor, 0.0),
        (AId::CenterColor, 0.5),
        (AId::EndColor, 1.0),
    ] {
        let color: Option<&str> = node.attribute(aid);
        if let Some((color, opacity)) = color.and_then(color::normalize) {
            stops.push(Stop {
                offset,
                color,
                opacity,
            });
        }
    }

    stops
}
