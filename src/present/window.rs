//! Window presentation through macroquad
//!
//! The GPU texture wants RGBA, so each blit expands BGR to RGBA into a
//! reused staging image, then draws the texture 1:1 at the window origin.

use std::convert::Infallible;

use macroquad::prelude::{draw_texture_ex, vec2, DrawTextureParams, FilterMode, Image, Texture2D, WHITE};

use super::Presenter;
use crate::rasterizer::{RawView, RowOrder, BYTES_PER_PIXEL};

/// Presents frames into the current macroquad window
#[derive(Default)]
pub struct WindowPresenter {
    staging: Option<Image>,
    texture: Option<Texture2D>,
}

impl WindowPresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Texture dimensions for `frame`, if it fits a macroquad image
pub(crate) fn texture_size(frame: RawView<'_>) -> Option<(u16, u16)> {
    Some((u16::try_from(frame.width()).ok()?, u16::try_from(frame.height()).ok()?))
}

/// Expand a BGR frame into RGBA bytes (alpha opaque)
pub(crate) fn bgr_to_rgba(frame: RawView<'_>, out: &mut Vec<u8>) {
    out.clear();
    out.reserve(frame.width() * frame.height() * 4);
    for row in frame.rows(RowOrder::TopDown) {
        for px in row.chunks_exact(BYTES_PER_PIXEL) {
            out.extend_from_slice(&[px[2], px[1], px[0], 255]);
        }
    }
}

impl Presenter for WindowPresenter {
    type Error = Infallible;

    fn present(&mut self, frame: RawView<'_>) -> Result<(), Infallible> {
        let Some((w, h)) = texture_size(frame) else {
            log::warn!(
                "{}x{} frame does not fit a texture, skipping blit",
                frame.width(),
                frame.height()
            );
            return Ok(());
        };

        let staging = self.staging.get_or_insert_with(|| Image {
            bytes: Vec::new(),
            width: w,
            height: h,
        });
        bgr_to_rgba(frame, &mut staging.bytes);

        let resized = staging.width != w || staging.height != h;
        staging.width = w;
        staging.height = h;

        if resized || self.texture.is_none() {
            let texture = Texture2D::from_image(staging);
            texture.set_filter(FilterMode::Nearest);
            self.texture = Some(texture);
        } else if let Some(texture) = &self.texture {
            texture.update(staging);
        }

        if let Some(texture) = &self.texture {
            draw_texture_ex(
                texture,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(w as f32, h as f32)),
                    ..Default::default()
                },
            );
        }
        Ok(())
    }
}
