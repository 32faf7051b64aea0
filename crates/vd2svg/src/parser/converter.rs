// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use super::vdtree::{self, AId, EId, NodeId, VdNode, MAX_DEPTH};
use super::{clippath, paint_server, style, OptionLog, Options};
use crate::*;

/// Per-conversion resources.
///
/// Lives only for the duration of a single conversion, so IDs always start from 1.
#[derive(Default)]
pub struct Cache {
    /// Converted gradients, by source node.
    ///
    /// `None` marks a gradient that was seen but cannot be converted.
    pub gradients: HashMap<NodeId, Option<Arc<LinearGradient>>>,
    pub linear_gradients: Vec<Arc<LinearGradient>>,
    pub clip_paths: Vec<Arc<ClipPath>>,

    // used for ID generation
    linear_gradient_index: usize,
    clip_path_index: usize,
}

impl Cache {
    pub(crate) fn gen_linear_gradient_id(&mut self) -> String {
        self.linear_gradient_index += 1;
        format!("g{}", self.linear_gradient_index)
    }

    pub(crate) fn gen_clip_path_id(&mut self) -> String {
        self.clip_path_index += 1;
        format!("c{}", self.clip_path_index)
    }
}

/// Converts an input `Document` into a `Drawable`.
///
/// Unsupported elements are skipped. Fails only when the output tree
/// would be nested too deep.
pub(crate) fn convert_doc(doc: &vdtree::Document, opt: &Options) -> Result<Drawable, Error> {
    let mut cache = Cache::default();

    let root = match doc.root_element() {
        Some(v) => v,
        None => {
            return Ok(Drawable {
                width: opt.default_size,
                height: opt.default_size,
                viewport_width: opt.default_size,
                viewport_height: opt.default_size,
                linear_gradients: Vec::new(),
                clip_paths: Vec::new(),
                root: Group::empty(),
            })
        }
    };

    if root.tag_name() != Some(EId::Vector) {
        log::warn!("The root element is not 'vector'. Converting anyway.");
    }

    let width = parse_dimension(root, AId::Width);
    let height = parse_dimension(root, AId::Height);
    let viewport_width = root
        .attribute::<f32>(AId::ViewportWidth)
        .filter(|n| n.is_finite() && *n > 0.0)
        .or(width)
        .unwrap_or(opt.default_size);
    let viewport_height = root
        .attribute::<f32>(AId::ViewportHeight)
        .filter(|n| n.is_finite() && *n > 0.0)
        .or(height)
        .unwrap_or(opt.default_size);

    paint_server::collect_gradients(doc, &mut cache);

    let mut g = Group::empty();
    g.opacity = root.attribute(AId::Alpha).unwrap_or(Opacity::ONE);
    let clips = convert_children(root, 0, &mut cache, &mut g)?;
    let g = apply_clip_paths(g, clips);

    log::debug!(
        "Converted with {} gradient(s) and {} clip path(s).",
        cache.linear_gradients.len(),
        cache.clip_paths.len()
    );

    Ok(Drawable {
        width: width.unwrap_or(viewport_width),
        height: height.unwrap_or(viewport_height),
        viewport_width,
        viewport_height,
        linear_gradients: cache.linear_gradients,
        clip_paths: cache.clip_paths,
        root: g,
    })
}

/// Parses `width`/`height`, which usually have an Android unit, like `24dp`.
fn parse_dimension(node: VdNode, aid: AId) -> Option<f32> {
    const UNITS: &[&str] = &["dip", "dp", "px", "sp", "pt", "in", "mm"];

    let value: &str = node.attribute(aid)?;
    let value = value.trim();
    let number = UNITS
        .iter()
        .find_map(|unit| value.strip_suffix(unit))
        .unwrap_or(value);

    svgtypes::Number::from_str(number.trim())
        .ok()
        .map(|n| n.0 as f32)
        .filter(|n| n.is_finite() && *n > 0.0)
        .log_none(|| log::warn!("Invalid {} value: '{}'.", aid, value))
}

/// Converts node's children into `parent`.
///
/// `depth` is the output nesting depth of `parent`.
///
/// Returns clip paths that were defined directly inside the node.
/// They must be applied by the caller.
pub(crate) fn convert_children(
    node: VdNode,
    depth: u32,
    cache: &mut Cache,
    parent: &mut Group,
) -> Result<Vec<Arc<ClipPath>>, Error> {
    let depth = children_depth(node, depth)?;

    let mut clips = Vec::new();
    for child in node.children() {
        if child.tag_name() == Some(EId::ClipPath) {
            clips.push(clippath::convert(child, cache));
        } else {
            convert_element(child, depth, cache, parent)?;
        }
    }

    Ok(clips)
}

/// Returns the output nesting depth of node's children.
///
/// Every clip path after the first one adds a nested group.
fn children_depth(node: VdNode, depth: u32) -> Result<u32, Error> {
    let clips = node
        .children()
        .filter(|n| n.tag_name() == Some(EId::ClipPath))
        .count();
    let extra = u32::try_from(clips.saturating_sub(1)).unwrap_or(u32::MAX);

    let depth = depth.saturating_add(1).saturating_add(extra);
    if depth > MAX_DEPTH {
        return Err(Error::ParsingFailed(roxmltree::Error::NodesLimitReached));
    }

    Ok(depth)
}

fn convert_element(
    node: VdNode,
    depth: u32,
    cache: &mut Cache,
    parent: &mut Group,
) -> Result<(), Error> {
    let tag_name = match node.tag_name() {
        Some(v) => v,
        None => return Ok(()),
    };

    match tag_name {
        EId::Group => convert_group(node, depth, cache, parent)?,
        EId::Path => {
            let path = style::convert_path(node, cache);
            parent.children.push(Node::Path(Box::new(path)));
        }
        EId::Vector | EId::Unknown => {
            // Not a container by itself, but its children are still rendered.
            for child in node.children() {
                convert_element(child, depth, cache, parent)?;
            }
        }
        // Resolved separately.
        EId::Attr | EId::ClipPath | EId::Gradient | EId::Item => {}
    }

    Ok(())
}

fn convert_group(
    node: VdNode,
    depth: u32,
    cache: &mut Cache,
    parent: &mut Group,
) -> Result<(), Error> {
    let mut g = Group::empty();
    g.transform = resolve_transform(node);

    let clips = convert_children(node, depth, cache, &mut g)?;
    let g = apply_clip_paths(g, clips);
    parent.children.push(Node::Group(Box::new(g)));

    Ok(())
}

/// Applies clip paths to a group.
///
/// Multiple clip paths are applied via nested groups, starting with the first one,
/// which results in their intersection.
pub(crate) fn apply_clip_paths(mut g: Group, clips: Vec<Arc<ClipPath>>) -> Group {
    let mut clips = clips.into_iter();
    g.clip_path = clips.next();

    let mut children = std::mem::take(&mut g.children);
    for clip in clips.rev() {
        let mut inner = Group::empty();
        inner.clip_path = Some(clip);
        inner.children = children;
        children = vec![Node::Group(Box::new(inner))];
    }
    g.children = children;

    g
}

/// Resolves a group transform.
///
/// Pivot is applied to scale and rotation, but not to translation.
fn resolve_transform(node: VdNode) -> Transform {
    let rotation: f32 = node.attribute(AId::Rotation).unwrap_or(0.0);
    let pivot_x: f32 = node.attribute(AId::PivotX).unwrap_or(0.0);
    let pivot_y: f32 = node.attribute(AId::PivotY).unwrap_or(0.0);
    let scale_x: f32 = node.attribute(AId::ScaleX).unwrap_or(1.0);
    let scale_y: f32 = node.attribute(AId::ScaleY).unwrap_or(1.0);
    let translate_x: f32 = node.attribute(AId::TranslateX).unwrap_or(0.0);
    let translate_y: f32 = node.attribute(AId::TranslateY).unwrap_or(0.0);

    let ts = Transform::from_translate(-pivot_x, -pivot_y)
        .post_scale(scale_x, scale_y)
        .post_concat(Transform::from_rotate(rotation))
        .post_translate(translate_x + pivot_x, translate_y + pivot_y);

    if ts.is_finite() {
        ts
    } else {
        log::warn!("Group has an invalid transform. Ignored.");
        Transform::default()
    }
}
