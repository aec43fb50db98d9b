//! Retained canvas primitives and their style attributes.

use super::color::Color;
use crate::util::{self, Rect};
use std::fmt;

/// Opaque identifier handed out by a [`CanvasSurface`](super::CanvasSurface).
///
/// Ids are never reused within a surface, so a stale id can only ever miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimitiveId(pub(crate) u64);

impl fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Geometry family of a primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Open polyline through every point (two points make a straight segment)
    Line,
    /// Axis-aligned rectangle spanned by two corner points
    Rectangle,
    /// Oval inscribed in the box spanned by two corner points
    Oval,
}

/// Stroke end cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat end exactly at the endpoint
    #[default]
    Butt,
    /// Rounded end extending half the width past the endpoint
    Round,
}

/// Dash pattern used for live previews of line, rectangle and oval.
pub const PREVIEW_DASH: [f64; 2] = [4.0, 4.0];

/// Visual attributes attached to a primitive at creation time.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Stroke color; `None` draws no outline
    pub stroke: Option<Color>,
    /// Interior fill; ignored for [`PrimitiveKind::Line`]
    pub fill: Option<Color>,
    /// Stroke width in pixels
    pub width: f64,
    /// On/off dash lengths, solid when `None`
    pub dash: Option<[f64; 2]>,
    /// End cap for open paths
    pub cap: LineCap,
    /// Draw polylines as a quadratic spline instead of straight segments
    pub smooth: bool,
    /// Apply the sparse cross-hatch mask to the fill
    pub stipple: bool,
}

impl Style {
    /// Plain solid stroke with the given color and width.
    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            stroke: Some(color),
            fill: None,
            width,
            dash: None,
            cap: LineCap::Butt,
            smooth: false,
            stipple: false,
        }
    }

    /// Returns a copy of this style drawn with the preview dash pattern.
    pub fn dashed(mut self) -> Self {
        self.dash = Some(PREVIEW_DASH);
        self
    }
}

/// A primitive as stored by the retained canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    pub points: Vec<(i32, i32)>,
    pub style: Style,
}

impl Primitive {
    /// Returns the axis-aligned bounding box, expanded to cover the stroke width.
    ///
    /// Returns `None` when the primitive has no points.
    pub fn bounding_box(&self) -> Option<Rect> {
        if self.points.is_empty() {
            return None;
        }
        let (mut min_x, mut min_y) = self.points[0];
        let (mut max_x, mut max_y) = self.points[0];
        for &(x, y) in &self.points[1..] {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        let padding = util::stroke_padding(self.style.width);
        let (min_x, max_x) = (min_x - padding, max_x + padding);
        let (min_y, max_y) = (min_y - padding, max_y + padding);

        // Degenerate drags still occupy at least one pixel.
        Rect::from_min_max(min_x, min_y, max_x.max(min_x + 1), max_y.max(min_y + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    #[test]
    fn bounding_box_covers_stroke_padding() {
        let primitive = Primitive {
            kind: PrimitiveKind::Line,
            points: vec![(10, 20), (30, 40)],
            style: Style::stroke(BLACK, 6.0),
        };

        let rect = primitive.bounding_box().expect("line should have bounds");
        assert_eq!(rect.x, 7);
        assert_eq!(rect.y, 17);
        assert_eq!(rect.width, 26);
        assert_eq!(rect.height, 26);
    }

    #[test]
    fn zero_size_rectangle_still_has_bounds() {
        let primitive = Primitive {
            kind: PrimitiveKind::Rectangle,
            points: vec![(10, 10), (10, 10)],
            style: Style::stroke(BLACK, 1.0),
        };

        let rect = primitive.bounding_box().expect("degenerate shape keeps bounds");
        assert!(rect.width > 0);
        assert!(rect.height > 0);
    }

    #[test]
    fn dashed_only_changes_dash() {
        let solid = Style::stroke(BLACK, 3.0);
        let dashed = solid.clone().dashed();
        assert_eq!(dashed.dash, Some(PREVIEW_DASH));
        assert_eq!(dashed.stroke, solid.stroke);
        assert_eq!(dashed.width, solid.width);
    }
}
