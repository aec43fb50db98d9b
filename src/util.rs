//! Utility functions for colors and drag geometry.
//!
//! This module provides:
//! - Name to color mapping for config values and the color prompt
//! - Rectangle normalization and oval bounds for corner-to-corner drags
//! - Spline subdivision used for smoothed freehand strokes

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the `--color` flag. Accepts the palette
/// names (case-insensitive) as well as `#rrggbb`/`#rgb` hex strings.
pub fn name_to_color(name: &str) -> Option<Color> {
    let trimmed = name.trim();
    if trimmed.starts_with('#') {
        return Color::from_hex(trimmed);
    }
    match trimmed.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" | "gold" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "purple" => Some(PURPLE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle used for damage regions and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Returns true if the point lies inside (min inclusive, max exclusive).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Returns the rectangle moved by the given offset.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Half the stroke width, rounded up, never less than one pixel.
pub fn stroke_padding(width: f64) -> i32 {
    let padding = (width / 2.0).ceil() as i32;
    padding.max(1)
}

/// Normalizes a corner-to-corner drag into `(x, y, w, h)` with non-negative size.
///
/// Dragging up or to the left is allowed; the origin becomes the smaller corner.
pub fn normalize_rect(x1: i32, y1: i32, x2: i32, y2: i32) -> (i32, i32, i32, i32) {
    (x1.min(x2), y1.min(y2), (x2 - x1).abs(), (y2 - y1).abs())
}

/// Calculates the oval inscribed in the box spanned by two corner points.
///
/// # Returns
/// Tuple `(cx, cy, rx, ry)` where `cx`, `cy` is the center and `rx`, `ry` are
/// the horizontal and vertical radii. Fractional centers are kept so odd-sized
/// drags stay inside their box.
pub fn oval_bounds(x1: i32, y1: i32, x2: i32, y2: i32) -> (f64, f64, f64, f64) {
    let cx = (x1 + x2) as f64 / 2.0;
    let cy = (y1 + y2) as f64 / 2.0;
    let rx = (x2 - x1).abs() as f64 / 2.0;
    let ry = (y2 - y1).abs() as f64 / 2.0;
    (cx, cy, rx, ry)
}

// ============================================================================
// Stroke Smoothing
// ============================================================================

/// One quadratic Bézier piece of a smoothed polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    pub start: (f64, f64),
    pub control: (f64, f64),
    pub end: (f64, f64),
}

impl QuadSegment {
    /// Converts to cubic control points `(c1, c2)` for APIs without quadratic curves.
    pub fn cubic_controls(&self) -> ((f64, f64), (f64, f64)) {
        let (sx, sy) = self.start;
        let (qx, qy) = self.control;
        let (ex, ey) = self.end;
        (
            (sx + 2.0 / 3.0 * (qx - sx), sy + 2.0 / 3.0 * (qy - sy)),
            (ex + 2.0 / 3.0 * (qx - ex), ey + 2.0 / 3.0 * (qy - ey)),
        )
    }
}

/// Splits a polyline into the quadratic B-spline pieces used for smoothed strokes.
///
/// The curve starts on the first point and ends on the last. Every interior point
/// acts as a control point, and consecutive pieces meet at the midpoint between
/// neighbouring interior points. With fewer than three points there is nothing to
/// smooth and an empty list is returned.
pub fn smooth_segments(points: &[(i32, i32)]) -> Vec<QuadSegment> {
    if points.len() < 3 {
        return Vec::new();
    }

    let as_f64 = |(x, y): (i32, i32)| (x as f64, y as f64);
    let midpoint = |a: (f64, f64), b: (f64, f64)| ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);

    let last = points.len() - 1;
    let mut segments = Vec::with_capacity(last - 1);
    let mut start = as_f64(points[0]);

    for i in 1..last {
        let control = as_f64(points[i]);
        let end = if i + 1 == last {
            as_f64(points[last])
        } else {
            midpoint(control, as_f64(points[i + 1]))
        };
        segments.push(QuadSegment {
            start,
            control,
            end,
        });
        start = end;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_names_resolve_to_palette() {
        assert_eq!(name_to_color("Purple"), Some(PURPLE));
        assert_eq!(name_to_color("gold"), Some(YELLOW));
        assert_eq!(name_to_color(" #00aa00 "), Some(GREEN));
        assert_eq!(name_to_color("mauve"), None);
    }

    #[test]
    fn oval_bounds_compute_center_and_radii() {
        let (cx, cy, rx, ry) = oval_bounds(0, 0, 10, 4);
        assert_eq!((cx, cy, rx, ry), (5.0, 2.0, 5.0, 2.0));

        let (cx, cy, rx, ry) = oval_bounds(10, 4, 0, 0);
        assert_eq!((cx, cy, rx, ry), (5.0, 2.0, 5.0, 2.0));
    }

    #[test]
    fn normalize_rect_handles_reverse_drags() {
        assert_eq!(normalize_rect(50, 50, 0, 10), (0, 10, 50, 40));
        assert_eq!(normalize_rect(0, 0, 0, 0), (0, 0, 0, 0));
    }

    #[test]
    fn smoothing_needs_three_points() {
        assert!(smooth_segments(&[(0, 0), (5, 5)]).is_empty());
    }

    #[test]
    fn three_points_produce_one_curve_through_endpoints() {
        let segments = smooth_segments(&[(0, 0), (5, 5), (10, 3)]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, (0.0, 0.0));
        assert_eq!(segments[0].control, (5.0, 5.0));
        assert_eq!(segments[0].end, (10.0, 3.0));
    }

    #[test]
    fn interior_segments_meet_at_midpoints() {
        let segments = smooth_segments(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].end, (10.0, 5.0));
        assert_eq!(segments[1].start, (10.0, 5.0));
        assert_eq!(segments[1].end, (0.0, 10.0));
    }

    #[test]
    fn cubic_controls_match_quadratic() {
        let segment = QuadSegment {
            start: (0.0, 0.0),
            control: (3.0, 3.0),
            end: (6.0, 0.0),
        };
        let ((c1x, c1y), (c2x, c2y)) = segment.cubic_controls();
        assert!((c1x - 2.0).abs() < 1e-9 && (c1y - 2.0).abs() < 1e-9);
        assert!((c2x - 4.0).abs() < 1e-9 && (c2y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn name_and_hex_color_mappings() {
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert_eq!(name_to_color("BLACK").unwrap(), BLACK);
        assert_eq!(name_to_color("#ff0000").unwrap(), RED);
        assert!(name_to_color("chartreuse").is_none());
    }
}
