//! Headless presentation: write the frame to a PNG file

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Presenter;
use crate::rasterizer::{RawView, RowOrder, BYTES_PER_PIXEL};

/// Errors raised while writing a frame to disk
#[derive(Debug, Error)]
pub enum PresentError {
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("frame of {width}x{height} exceeds PNG dimensions")]
    TooLarge { width: usize, height: usize },
}

/// Saves each presented frame to `path`, overwriting the previous one
pub struct PngPresenter {
    path: PathBuf,
}

impl PngPresenter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Presenter for PngPresenter {
    type Error = PresentError;

    fn present(&mut self, frame: RawView<'_>) -> Result<(), PresentError> {
        let too_large = PresentError::TooLarge {
            width: frame.width(),
            height: frame.height(),
        };
        let (Ok(w), Ok(h)) = (u32::try_from(frame.width()), u32::try_from(frame.height())) else {
            return Err(too_large);
        };

        // PNG stores RGB; swap channels, keep top-down row order
        let mut rgb = Vec::with_capacity(frame.bytes().len());
        for row in frame.rows(RowOrder::TopDown) {
            for px in row.chunks_exact(BYTES_PER_PIXEL) {
                rgb.extend_from_slice(&[px[2], px[1], px[0]]);
            }
        }

        let img = image::RgbImage::from_raw(w, h, rgb).ok_or(too_large)?;
        img.save_with_format(&self.path, image::ImageFormat::Png)
            .map_err(|source| PresentError::Encode {
                path: self.path.clone(),
                source,
            })?;

        log::info!("wrote {}x{} frame to {}", w, h, self.path.display());
        Ok(())
    }
}
