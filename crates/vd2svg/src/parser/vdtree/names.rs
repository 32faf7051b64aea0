// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A VectorDrawable element ID.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EId {
    /// `aapt:attr`, an inline attribute value.
    Attr,
    ClipPath,
    Gradient,
    Group,
    Item,
    Path,
    Vector,
    /// Any other element. Its children are still parsed.
    Unknown,
}

impl EId {
    pub fn from_str(text: &str) -> Option<EId> {
        let eid = match text {
            "clip-path" => EId::ClipPath,
            "gradient" => EId::Gradient,
            "group" => EId::Group,
            "item" => EId::Item,
            "path" => EId::Path,
            "vector" => EId::Vector,
            _ => return None,
        };

        Some(eid)
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            EId::Attr => "aapt:attr",
            EId::ClipPath => "clip-path",
            EId::Gradient => "gradient",
            EId::Group => "group",
            EId::Item => "item",
            EId::Path => "path",
            EId::Vector => "vector",
            EId::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for EId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// A VectorDrawable attribute ID.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AId {
    Alpha,
    CenterColor,
    Color,
    EndColor,
    EndX,
    EndY,
    FillAlpha,
    FillColor,
    FillType,
    Height,
    Name,
    Offset,
    PathData,
    PivotX,
    PivotY,
    Rotation,
    ScaleX,
    ScaleY,
    StartColor,
    StartX,
    StartY,
    StrokeAlpha,
    StrokeColor,
    StrokeLineCap,
    StrokeLineJoin,
    StrokeMiterLimit,
    StrokeWidth,
    TranslateX,
    TranslateY,
    Type,
    ViewportHeight,
    ViewportWidth,
    Width,
}

impl AId {
    pub fn from_str(text: &str) -> Option<AId> {
        let aid = match text {
            "alpha" => AId::Alpha,
            "centerColor" => AId::CenterColor,
            "color" => AId::Color,
            "endColor" => AId::EndColor,
            "endX" => AId::EndX,
            "endY" => AId::EndY,
            "fillAlpha" => AId::FillAlpha,
            "fillColor" => AId::FillColor,
            "fillType" => AId::FillType,
            "height" => AId::Height,
            "name" => AId::Name,
            "offset" => AId::Offset,
            "pathData" => AId::PathData,
            "pivotX" => AId::PivotX,
            "pivotY" => AId::PivotY,
            "rotation" => AId::Rotation,
            "scaleX" => AId::ScaleX,
            "scaleY" => AId::ScaleY,
            "startColor" => AId::StartColor,
            "startX" => AId::StartX,
            "startY" => AId::StartY,
            "strokeAlpha" => AId::StrokeAlpha,
            "strokeColor" => AId::StrokeColor,
            "strokeLineCap" => AId::StrokeLineCap,
            "strokeLineJoin" => AId::StrokeLineJoin,
            "strokeMiterLimit" => AId::StrokeMiterLimit,
            "strokeWidth" => AId::StrokeWidth,
            "translateX" => AId::TranslateX,
            "translateY" => AId::TranslateY,
            "type" => AId::Type,
            "viewportHeight" => AId::ViewportHeight,
            "viewportWidth" => AId::ViewportWidth,
            "width" => AId::Width,
            _ => return None,
        };

        Some(aid)
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            AId::Alpha => "alpha",
            AId::CenterColor => "centerColor",
            AId::Color => "color",
            AId::EndColor => "endColor",
            AId::EndX => "endX",
            AId::EndY => "endY",
            AId::FillAlpha => "fillAlpha",
            AId::FillColor => "fillColor",
            AId::FillType => "fillType",
            AId::Height => "height",
            AId::Name => "name",
            AId::Offset => "offset",
            AId::PathData => "pathData",
            AId::PivotX => "pivotX",
            AId::PivotY => "pivotY",
            AId::Rotation => "rotation",
            AId::ScaleX => "scaleX",
            AId::ScaleY => "scaleY",
            AId::StartColor => "startColor",
            AId::StartX => "startX",
            AId::StartY => "startY",
            AId::StrokeAlpha => "strokeAlpha",
            AId::StrokeColor => "strokeColor",
            AId::StrokeLineCap => "strokeLineCap",
            AId::StrokeLineJoin => "strokeLineJoin",
            AId::StrokeMiterLimit => "strokeMiterLimit",
            AId::StrokeWidth => "strokeWidth",
            AId::TranslateX => "translateX",
            AId::TranslateY => "translateY",
            AId::Type => "type",
            AId::ViewportHeight => "viewportHeight",
            AId::ViewportWidth => "viewportWidth",
            AId::Width => "width",
        }
    }
}

impl std::fmt::Display for AId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
