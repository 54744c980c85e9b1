//! Triangle fill: bounding-box scan with a barycentric inside test
//!
//! Edges are inclusive, so two triangles sharing an edge both write the
//! pixels on it. That overdraw is harmless for flat colors but shows up
//! as a seam if triangles are ever blended edge-to-edge.

use super::framebuffer::Framebuffer;
use super::math::{clipped_bounds, Barycentric};
use super::types::{Color, Point, RasterStats, Triangle};

/// Fill the triangle (`p1`, `p2`, `p3`) with `color`.
///
/// Only the clipped bounding box is scanned. Zero-area triangles are
/// skipped without touching the framebuffer.
pub fn draw_triangle(
    fb: &mut Framebuffer,
    p1: Point,
    p2: Point,
    p3: Point,
    color: Color,
) -> RasterStats {
    rasterize_triangle(fb, &Triangle::new(p1, p2, p3), color)
}

/// Fill every `(triangle, color)` pair in order
pub fn draw_triangles(fb: &mut Framebuffer, shapes: &[(Triangle, Color)]) -> RasterStats {
    let mut stats = RasterStats::default();
    for (tri, color) in shapes {
        stats += rasterize_triangle(fb, tri, *color);
    }
    stats
}

/// Rasterize a single triangle
pub fn rasterize_triangle(fb: &mut Framebuffer, tri: &Triangle, color: Color) -> RasterStats {
    let mut stats = RasterStats::default();

    let Some(bc) = Barycentric::new(tri) else {
        log::debug!("skipping degenerate triangle {:?}", tri.points);
        stats.degenerate = 1;
        return stats;
    };

    // Nothing on screen
    let Some(bb) = clipped_bounds(tri, fb.width(), fb.height()) else {
        return stats;
    };

    for y in bb.min_y..=bb.max_y {
        for x in bb.min_x..=bb.max_x {
            stats.tested += 1;
            if bc.contains(x as i64, y as i64) {
                fb.set_pixel(x, y, color);
                stats.written += 1;
            }
        }
    }

    stats
}
