//! Owned pixel grid in presentation byte layout

use super::types::Color;

/// Bytes per pixel (blue, green, red)
pub const BYTES_PER_PIXEL: usize = 3;

/// Framebuffer for software rendering
pub struct Framebuffer {
    pixels: Vec<u8>, // BGR, 3 bytes per pixel, rows top-down
    width: usize,
    height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * BYTES_PER_PIXEL],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw BGR bytes, rows top-down
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Resize the framebuffer (contents reset to black)
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.pixels = vec![0; width * height * BYTES_PER_PIXEL];
        }
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bgr();
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Out-of-bounds writes are ignored
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * BYTES_PER_PIXEL;
            self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.to_bgr());
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * BYTES_PER_PIXEL;
            Some(Color::from_bgr([
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
            ]))
        } else {
            None
        }
    }

    /// Read-only view of the pixel memory for presentation
    pub fn raw_view(&self) -> RawView<'_> {
        RawView {
            bytes: &self.pixels,
            width: self.width,
            height: self.height,
        }
    }
}

/// Borrowed pixel memory plus its geometry.
///
/// The byte length always equals `width * height * BYTES_PER_PIXEL`, so
/// row access never goes out of range.
#[derive(Debug, Clone, Copy)]
pub struct RawView<'a> {
    bytes: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> RawView<'a> {
    /// Returns `None` if `bytes` does not hold exactly `width x height` pixels
    pub fn new(bytes: &'a [u8], width: usize, height: usize) -> Option<Self> {
        let len = width.checked_mul(height)?.checked_mul(BYTES_PER_PIXEL)?;
        (bytes.len() == len).then_some(Self { bytes, width, height })
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    pub fn row(&self, y: usize) -> &'a [u8] {
        let stride = self.stride();
        &self.bytes[y * stride..(y + 1) * stride]
    }

    /// Rows in the requested order
    pub fn rows(&self, order: RowOrder) -> impl Iterator<Item = &'a [u8]> + 'a {
        let view = *self;
        (0..self.height).map(move |i| match order {
            RowOrder::TopDown => view.row(i),
            RowOrder::BottomUp => view.row(view.height - 1 - i),
        })
    }
}

/// Row order expected by a destination surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    #[default]
    TopDown,
    /// Destination origin is bottom-left
    BottomUp,
}
