//! Core types for the rasterizer

use serde::{Deserialize, Serialize};

/// RGB color (0-255 per channel, no alpha)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to the framebuffer byte layout (blue, green, red)
    pub fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    pub fn from_bgr(bytes: [u8; 3]) -> Self {
        Self {
            r: bytes[2],
            g: bytes[1],
            b: bytes[0],
        }
    }
}

/// Integer point in framebuffer space (origin top-left, y down)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Three vertices, any winding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub points: [Point; 3],
}

impl Triangle {
    pub fn new(p1: impl Into<Point>, p2: impl Into<Point>, p3: impl Into<Point>) -> Self {
        Self {
            points: [p1.into(), p2.into(), p3.into()],
        }
    }
}

/// Counters for one or more rasterized triangles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterStats {
    /// Pixels that went through the inside test
    pub tested: usize,
    /// Pixels that passed and were written
    pub written: usize,
    /// Triangles skipped because they have no area
    pub degenerate: usize,
}

impl std::ops::AddAssign for RasterStats {
    fn add_assign(&mut self, other: RasterStats) {
        self.tested += other.tested;
        self.written += other.written;
        self.degenerate += other.degenerate;
    }
}
