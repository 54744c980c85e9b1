//! Scene description: framebuffer size, background and the triangles to fill
//!
//! Scenes are stored as RON so they can be edited by hand.

mod file;

pub use file::*;

use serde::{Deserialize, Serialize};

use crate::rasterizer::{Color, Point, Triangle, HEIGHT, WIDTH};

/// Largest accepted framebuffer edge
pub const MAX_DIMENSION: usize = 8192;

/// One triangle and the color it is filled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
    pub color: Color,
}

impl Shape {
    pub fn new(p1: impl Into<Point>, p2: impl Into<Point>, p3: impl Into<Point>, color: Color) -> Self {
        Self {
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
            color,
        }
    }

    pub fn triangle(&self) -> Triangle {
        Triangle::new(self.p1, self.p2, self.p3)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    pub background: Color,
    pub triangles: Vec<Shape>,
}

impl Default for Scene {
    /// White background with a single blue triangle
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: Color::WHITE,
            triangles: vec![Shape::new((100, 100), (540, 100), (100, 380), Color::BLUE)],
        }
    }
}

impl Scene {
    /// Empty scene of the given size
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            background: Color::WHITE,
            triangles: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        let ok = |d: usize| (1..=MAX_DIMENSION).contains(&d);
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(SceneError::InvalidSize {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// `(triangle, color)` pairs in draw order
    pub fn shapes(&self) -> Vec<(Triangle, Color)> {
        self.triangles.iter().map(|s| (s.triangle(), s.color)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_is_valid() {
        let scene = Scene::default();
        assert!(scene.validate().is_ok());
        assert_eq!(scene.shapes().len(), 1);
        assert_eq!(scene.shapes()[0].1, Color::BLUE);
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        assert!(Scene::empty(0, 10).validate().is_err());
        assert!(Scene::empty(10, 0).validate().is_err());
        assert!(Scene::empty(MAX_DIMENSION + 1, 10).validate().is_err());
        assert!(Scene::empty(MAX_DIMENSION, MAX_DIMENSION).validate().is_ok());
    }

    #[test]
    fn test_shapes_keep_order() {
        let mut scene = Scene::empty(10, 10);
        scene.triangles.push(Shape::new((0, 0), (1, 0), (0, 1), Color::RED));
        scene.triangles.push(Shape::new((5, 5), (9, 5), (5, 9), Color::GREEN));
        let shapes = scene.shapes();
        assert_eq!(shapes[0].1, Color::RED);
        assert_eq!(shapes[1].0, Triangle::new((5, 5), (9, 5), (5, 9)));
    }
}
