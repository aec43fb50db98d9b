//! Cairo-based rendering functions for canvas primitives.

use super::canvas::RetainedCanvas;
use super::color::Color;
use super::primitive::{LineCap, Primitive, PrimitiveKind, Style};
use crate::util;

/// Side length of the repeating stipple tile.
const STIPPLE_TILE: i32 = 4;

/// Fills the whole target with the canvas background color.
///
/// Should be called before rendering primitives.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the previous contents
}

/// Renders every primitive of the canvas in stacking order.
pub fn render_canvas(ctx: &cairo::Context, canvas: &RetainedCanvas) {
    for (_, primitive) in canvas.iter() {
        render_primitive(ctx, primitive);
    }
}

/// Renders a single primitive.
///
/// Fill (if any) is painted first, then the outline on top, matching the way a
/// filled shape with a differently colored border is expected to look.
pub fn render_primitive(ctx: &cairo::Context, primitive: &Primitive) {
    let style = &primitive.style;
    let _ = ctx.save();

    match primitive.kind {
        PrimitiveKind::Line => {
            append_line_path(ctx, &primitive.points, style.smooth);
        }
        PrimitiveKind::Rectangle => {
            if let [(x1, y1), (x2, y2), ..] = primitive.points[..] {
                let (x, y, w, h) = util::normalize_rect(x1, y1, x2, y2);
                ctx.rectangle(x as f64, y as f64, w as f64, h as f64);
            }
        }
        PrimitiveKind::Oval => {
            if let [(x1, y1), (x2, y2), ..] = primitive.points[..] {
                append_oval_path(ctx, x1, y1, x2, y2);
            }
        }
    }

    if primitive.kind != PrimitiveKind::Line {
        if let Some(fill) = style.fill {
            fill_current_path(ctx, fill, style.stipple);
        }
    }

    if let Some(stroke) = style.stroke {
        apply_stroke_style(ctx, style);
        ctx.set_source_rgba(stroke.r, stroke.g, stroke.b, stroke.a);
        let _ = ctx.stroke();
    } else {
        ctx.new_path();
    }

    let _ = ctx.restore();
}

fn apply_stroke_style(ctx: &cairo::Context, style: &Style) {
    ctx.set_line_width(style.width);
    match style.cap {
        LineCap::Butt => {
            ctx.set_line_cap(cairo::LineCap::Butt);
            ctx.set_line_join(cairo::LineJoin::Miter);
        }
        LineCap::Round => {
            ctx.set_line_cap(cairo::LineCap::Round);
            ctx.set_line_join(cairo::LineJoin::Round);
        }
    }
    match style.dash {
        Some(pattern) => ctx.set_dash(&pattern, 0.0),
        None => ctx.set_dash(&[], 0.0),
    }
}

/// Fills the current path without consuming it so the outline can follow.
fn fill_current_path(ctx: &cairo::Context, color: Color, stipple: bool) {
    if !stipple {
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        let _ = ctx.fill_preserve();
        return;
    }

    let Some(mask) = stipple_pattern() else {
        // Fall back to a solid fill rather than dropping the fill entirely
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        let _ = ctx.fill_preserve();
        return;
    };

    // The path is not part of the saved state, so it survives restore()
    let _ = ctx.save();
    ctx.clip_preserve();
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.mask(&mask);
    let _ = ctx.restore();
}

/// Builds the repeating sparse dot mask (one pixel in four per row, offset per row).
fn stipple_pattern() -> Option<cairo::SurfacePattern> {
    let mut tile = cairo::ImageSurface::create(cairo::Format::A8, STIPPLE_TILE, STIPPLE_TILE).ok()?;
    let stride = tile.stride() as usize;
    {
        let mut data = tile.data().ok()?;
        for row in 0..STIPPLE_TILE as usize {
            let col = if row % 2 == 0 { 0 } else { 2 };
            data[row * stride + col] = 0xff;
        }
    }
    tile.mark_dirty();

    let pattern = cairo::SurfacePattern::create(&tile);
    pattern.set_extend(cairo::Extend::Repeat);
    pattern.set_filter(cairo::Filter::Nearest);
    Some(pattern)
}

/// Appends an open path through the points, straight or spline-smoothed.
fn append_line_path(ctx: &cairo::Context, points: &[(i32, i32)], smooth: bool) {
    let Some(&(x0, y0)) = points.first() else {
        return;
    };
    ctx.move_to(x0 as f64, y0 as f64);

    if points.len() == 1 {
        // Zero-length segment so round caps still leave a dot
        ctx.line_to(x0 as f64, y0 as f64);
        return;
    }

    let segments = if smooth {
        util::smooth_segments(points)
    } else {
        Vec::new()
    };

    if segments.is_empty() {
        for &(x, y) in &points[1..] {
            ctx.line_to(x as f64, y as f64);
        }
        return;
    }

    for segment in &segments {
        let ((c1x, c1y), (c2x, c2y)) = segment.cubic_controls();
        ctx.curve_to(c1x, c1y, c2x, c2y, segment.end.0, segment.end.1);
    }
}

/// Appends an oval inscribed in the drag box.
///
/// Cairo only draws circular arcs, so the unit circle is scaled into place. The
/// scale is undone before stroking so line width stays uniform.
fn append_oval_path(ctx: &cairo::Context, x1: i32, y1: i32, x2: i32, y2: i32) {
    let (cx, cy, rx, ry) = util::oval_bounds(x1, y1, x2, y2);
    if rx == 0.0 || ry == 0.0 {
        // Flat oval collapses to the segment it spans
        ctx.move_to(cx - rx, cy - ry);
        ctx.line_to(cx + rx, cy + ry);
        return;
    }

    let _ = ctx.save();
    ctx.translate(cx, cy);
    ctx.scale(rx, ry);
    ctx.new_sub_path();
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.close_path();
    let _ = ctx.restore();
}
