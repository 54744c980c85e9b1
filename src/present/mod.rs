//! Presentation: one blit of the framebuffer to a destination per frame
//!
//! The rasterizer never talks to a display API. Each destination
//! implements [`Presenter`] and receives the frame as a [`RawView`].

mod png;
mod window;

pub use png::{PngPresenter, PresentError};
pub use window::WindowPresenter;

use crate::rasterizer::{RawView, RowOrder};

/// A destination surface for finished frames
pub trait Presenter {
    type Error;

    /// Copy `frame` to the destination, verbatim, in a single blit
    fn present(&mut self, frame: RawView<'_>) -> Result<(), Self::Error>;
}

/// Keeps a copy of the last presented frame in memory
#[derive(Debug, Default)]
pub struct CapturePresenter {
    pub row_order: RowOrder,
    pub bytes: Vec<u8>,
    pub width: usize,
    pub height: usize,
    /// Number of frames presented so far
    pub frames: usize,
}

impl CapturePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row_order(row_order: RowOrder) -> Self {
        Self {
            row_order,
            ..Self::default()
        }
    }
}

impl Presenter for CapturePresenter {
    type Error = std::convert::Infallible;

    fn present(&mut self, frame: RawView<'_>) -> Result<(), Self::Error> {
        self.bytes.clear();
        for row in frame.rows(self.row_order) {
            self.bytes.extend_from_slice(row);
        }
        self.width = frame.width();
        self.height = frame.height();
        self.frames += 1;
        Ok(())
    }
}
