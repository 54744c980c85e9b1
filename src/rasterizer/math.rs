//! Triangle geometry: clipped bounding boxes and barycentric weights

use super::types::{Point, Triangle};

/// Inclusive pixel rectangle, already clipped to a framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl BoundingBox {
    pub fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }

    pub fn area(&self) -> usize {
        self.width() * self.height()
    }
}

/// Bounding box of `tri` clipped to `[0, width-1] x [0, height-1]`.
/// Returns `None` when nothing of the box lies on the framebuffer.
pub fn clipped_bounds(tri: &Triangle, width: usize, height: usize) -> Option<BoundingBox> {
    if width == 0 || height == 0 {
        return None;
    }
    let [a, b, c] = tri.points;

    let min_x = a.x.min(b.x).min(c.x) as i64;
    let max_x = a.x.max(b.x).max(c.x) as i64;
    let min_y = a.y.min(b.y).min(c.y) as i64;
    let max_y = a.y.max(b.y).max(c.y) as i64;

    let min_x = min_x.max(0);
    let min_y = min_y.max(0);
    let max_x = max_x.min(width as i64 - 1);
    let max_y = max_y.min(height as i64 - 1);

    if min_x > max_x || min_y > max_y {
        return None;
    }

    Some(BoundingBox {
        min_x: min_x as usize,
        min_y: min_y as usize,
        max_x: max_x as usize,
        max_y: max_y as usize,
    })
}

/// Per-triangle constants for the barycentric inside test.
///
/// The denominator is twice the signed area. It is computed exactly in
/// integers so collinear vertices are detected without rounding, and
/// the per-pixel weights are evaluated in `f64`.
#[derive(Debug, Clone, Copy)]
pub struct Barycentric {
    x3: i64,
    y3: i64,
    // (y2 - y3), (x3 - x2), (y3 - y1), (x1 - x3)
    a1: f64,
    b1: f64,
    a2: f64,
    b2: f64,
    denom: f64,
}

impl Barycentric {
    /// Returns `None` for zero-area triangles. The denominator is an exact
    /// integer, so any non-zero value is at least 1 and needs no epsilon.
    pub fn new(tri: &Triangle) -> Option<Self> {
        let [p1, p2, p3] = tri.points;
        let (x1, y1) = (p1.x as i64, p1.y as i64);
        let (x2, y2) = (p2.x as i64, p2.y as i64);
        let (x3, y3) = (p3.x as i64, p3.y as i64);

        let a1 = y2 - y3;
        let b1 = x3 - x2;
        let a2 = y3 - y1;
        let b2 = x1 - x3;

        // i128: products of 33-bit differences overflow i64
        let denom = a1 as i128 * b2 as i128 + b1 as i128 * (y1 - y3) as i128;
        if denom == 0 {
            return None;
        }
        let denom = denom as f64;

        Some(Self {
            x3,
            y3,
            a1: a1 as f64,
            b1: b1 as f64,
            a2: a2 as f64,
            b2: b2 as f64,
            denom,
        })
    }

    /// Weight numerators; each weight is its numerator over the denominator.
    /// The third is `denom - n1 - n2`, i.e. `w3 = 1 - w1 - w2` without
    /// rounding, so pixels exactly on an edge test as zero.
    fn numerators(&self, x: i64, y: i64) -> (f64, f64, f64) {
        let dx = (x - self.x3) as f64;
        let dy = (y - self.y3) as f64;
        let n1 = self.a1 * dx + self.b1 * dy;
        let n2 = self.a2 * dx + self.b2 * dy;
        (n1, n2, self.denom - n1 - n2)
    }

    /// Weights `(w1, w2, w3)` of the pixel at `(x, y)`; they sum to 1
    pub fn weights(&self, x: i64, y: i64) -> (f64, f64, f64) {
        let (n1, n2, n3) = self.numerators(x, y);
        (n1 / self.denom, n2 / self.denom, n3 / self.denom)
    }

    /// Inside test (`w1 >= 0 && w2 >= 0 && w3 >= 0`), inclusive of edges
    /// and vertices
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let (n1, n2, n3) = self.numerators(x, y);
        if self.denom > 0.0 {
            n1 >= 0.0 && n2 >= 0.0 && n3 >= 0.0
        } else {
            n1 <= 0.0 && n2 <= 0.0 && n3 <= 0.0
        }
    }
}

/// Barycentric weights of `p` in triangle (`v1`, `v2`, `v3`).
/// Returns `None` if the triangle is degenerate.
pub fn barycentric(p: Point, v1: Point, v2: Point, v3: Point) -> Option<(f64, f64, f64)> {
    Barycentric::new(&Triangle::new(v1, v2, v3)).map(|bc| bc.weights(p.x as i64, p.y as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barycentric_inside() {
        let bc = barycentric(
            Point::new(5, 3),
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(5, 10),
        )
        .unwrap();
        assert!(bc.0 >= 0.0 && bc.1 >= 0.0 && bc.2 >= 0.0);
        assert!((bc.0 + bc.1 + bc.2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_barycentric_at_vertices() {
        let tri = Triangle::new((0, 0), (10, 0), (5, 10));
        let bc = Barycentric::new(&tri).unwrap();
        let (w1, w2, w3) = bc.weights(0, 0);
        assert!((w1 - 1.0).abs() < 1e-12 && w2.abs() < 1e-12 && w3.abs() < 1e-12);
        let (w1, w2, w3) = bc.weights(10, 0);
        assert!(w1.abs() < 1e-12 && (w2 - 1.0).abs() < 1e-12 && w3.abs() < 1e-12);
        let (w1, w2, w3) = bc.weights(5, 10);
        assert!(w1.abs() < 1e-12 && w2.abs() < 1e-12 && (w3 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_barycentric_outside() {
        let tri = Triangle::new((0, 0), (10, 0), (0, 10));
        let bc = Barycentric::new(&tri).unwrap();
        assert!(!bc.contains(10, 10));
        assert!(!bc.contains(-1, 0));
    }

    #[test]
    fn test_winding_does_not_matter() {
        let cw = Barycentric::new(&Triangle::new((0, 0), (10, 0), (0, 10))).unwrap();
        let ccw = Barycentric::new(&Triangle::new((0, 0), (0, 10), (10, 0))).unwrap();
        for (x, y) in [(1, 1), (5, 5), (6, 6), (0, 10), (11, 0)] {
            assert_eq!(cw.contains(x, y), ccw.contains(x, y));
        }
    }

    #[test]
    fn test_degenerate_triangles() {
        assert!(Barycentric::new(&Triangle::new((0, 0), (5, 5), (10, 10))).is_none());
        assert!(Barycentric::new(&Triangle::new((3, 3), (3, 3), (3, 3))).is_none());
        assert!(Barycentric::new(&Triangle::new((0, 4), (7, 4), (2, 4))).is_none());
        assert!(barycentric(Point::new(1, 1), Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)).is_none());
    }

    #[test]
    fn test_extreme_coordinates_are_not_degenerate() {
        let tri = Triangle::new((i32::MIN, i32::MIN), (i32::MAX, i32::MIN), (i32::MIN, i32::MAX));
        assert!(Barycentric::new(&tri).is_some());
    }

    #[test]
    fn test_clipped_bounds() {
        let tri = Triangle::new((-5, 2), (4, -3), (20, 7));
        let bb = clipped_bounds(&tri, 10, 5).unwrap();
        assert_eq!(bb, BoundingBox { min_x: 0, min_y: 0, max_x: 9, max_y: 4 });
        assert_eq!(bb.area(), 50);
    }

    #[test]
    fn test_clipped_bounds_outside() {
        let left = Triangle::new((-10, 0), (-5, 5), (-1, 2));
        assert!(clipped_bounds(&left, 10, 10).is_none());
        let below = Triangle::new((0, 10), (5, 15), (9, 12));
        assert!(clipped_bounds(&below, 10, 10).is_none());
        assert!(clipped_bounds(&Triangle::new((0, 0), (1, 0), (0, 1)), 0, 10).is_none());
    }
}
