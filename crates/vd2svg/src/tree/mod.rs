// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::sync::Arc;

pub use strict_num::NormalizedF32;
pub use tiny_skia_path::Transform;

/// An alias to `NormalizedF32`.
pub type Opacity = NormalizedF32;

/// A color.
///
/// Either a `#RRGGBB` color or an opaque reference, like `@color/accent`
/// or `?attr/colorPrimary`. Both are written as is.
#[derive(Clone, PartialEq, Debug)]
pub enum Color {
    /// A `#RRGGBB` color. Hex digits keep the case they were written in.
    Hex(String),
    /// A color reference or an unparsable literal.
    Reference(String),
}

impl Color {
    /// Constructs a new RGB color.
    #[inline]
    pub fn new_rgb(red: u8, green: u8, blue: u8) -> Self {
        Color::Hex(format!("#{:02x}{:02x}{:02x}", red, green, blue))
    }

    /// Constructs a black color.
    #[inline]
    pub fn black() -> Self {
        Color::new_rgb(0, 0, 0)
    }
}

/// A paint style.
#[derive(Clone, Debug)]
pub enum Paint {
    /// A solid color.
    Color(Color),
    /// A shared gradient, also listed in [`Drawable::linear_gradients`].
    LinearGradient(Arc<LinearGradient>),
}

/// A fill rule.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// A fill style.
#[derive(Clone, Debug)]
pub struct Fill {
    /// Fill paint.
    pub paint: Paint,
    /// Fill opacity, with `fillAlpha` already applied.
    pub opacity: Opacity,
    /// Fill rule.
    pub rule: FillRule,
}

/// A line cap.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// A line join.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// A stroke style.
///
/// Only solid colors are supported.
#[derive(Clone, Debug)]
pub struct Stroke {
    /// `None` when only a stroke width was set.
    pub color: Option<(Color, Opacity)>,
    /// Stroke width. Not written when not set.
    pub width: Option<f32>,
    /// Line cap. Not written when not set.
    pub linecap: Option<LineCap>,
    /// Line join. Not written when not set.
    pub linejoin: Option<LineJoin>,
    /// Miter limit. Not written when not set.
    pub miterlimit: Option<f32>,
}

/// A gradient stop.
#[derive(Clone, Debug)]
pub struct Stop {
    /// Stop offset, usually in the 0..1 range.
    pub offset: f32,
    /// Stop color.
    pub color: Color,
    /// Stop opacity.
    pub opacity: Opacity,
}

/// A linear gradient.
///
/// Always in `userSpaceOnUse` units.
#[derive(Debug)]
pub struct LinearGradient {
    /// Element's ID, like `g1`.
    pub id: String,
    /// `startX` value.
    pub x1: f32,
    /// `startY` value.
    pub y1: f32,
    /// `endX` value.
    pub x2: f32,
    /// `endY` value.
    pub y2: f32,
    /// Gradient stops. Never empty.
    pub stops: Vec<Stop>,
}

/// A clip path.
#[derive(Debug)]
pub struct ClipPath {
    /// Element's ID, like `c1`.
    pub id: String,
    /// Path data, copied verbatim.
    pub data: String,
}

/// A path element.
#[derive(Clone, Debug)]
pub struct Path {
    /// Path data, copied verbatim.
    pub data: String,
    /// Fill style. `None` when neither a fill color nor a gradient was set.
    pub fill: Option<Fill>,
    /// Stroke style. `None` when neither a stroke color nor a width was set.
    pub stroke: Option<Stroke>,
}

/// A group container.
#[derive(Clone, Debug)]
pub struct Group {
    /// Group transform, in the parent coordinate system.
    pub transform: Transform,
    /// Group opacity.
    ///
    /// Only the root group can have one.
    pub opacity: Opacity,
    /// A shared clip path, also listed in [`Drawable::clip_paths`].
    pub clip_path: Option<Arc<ClipPath>>,
    /// Group children, in paint order.
    pub children: Vec<Node>,
}

impl Group {
    /// Creates an empty group.
    pub fn empty() -> Self {
        Group {
            transform: Transform::default(),
            opacity: Opacity::ONE,
            clip_path: None,
            children: Vec::new(),
        }
    }

    /// Checks if the group has no attributes of its own.
    pub fn is_plain(&self) -> bool {
        self.transform.is_identity() && self.opacity == Opacity::ONE && self.clip_path.is_none()
    }

    /// Checks if the group has children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A drawable node.
#[derive(Clone, Debug)]
pub enum Node {
    /// A group.
    Group(Box<Group>),
    /// A path.
    Path(Box<Path>),
}

/// A converted drawable.
///
/// Resources are stored in the order they were discovered,
/// which is also the order they will be written in.
#[derive(Debug)]
pub struct Drawable {
    /// Output document width, in user units.
    pub width: f32,
    /// Output document height, in user units.
    pub height: f32,
    /// Canvas width, i.e. `viewBox` width.
    pub viewport_width: f32,
    /// Canvas height, i.e. `viewBox` height.
    pub viewport_height: f32,
    /// All converted gradients, including unused ones.
    pub linear_gradients: Vec<Arc<LinearGradient>>,
    /// All clip paths.
    pub clip_paths: Vec<Arc<ClipPath>>,
    /// The root group. Never has a transform.
    pub root: Group,
}

impl Drawable {
    /// Returns an iterator over all nodes of the drawable, in paint order.
    pub fn descendants(&self) -> impl Iterator<Item = &Node> {
        fn collect<'a>(g: &'a Group, out: &mut Vec<&'a Node>) {
            for node in &g.children {
                out.push(node);
                if let Node::Group(ref g) = node {
                    collect(g, out);
                }
            }
        }

        let mut nodes = Vec::new();
        collect(&self.root, &mut nodes);
        nodes.into_iter()
    }
}
