//! Software triangle rasterizer
//!
//! - Owned BGR framebuffer, no global state
//! - Bounding-box scan clipped to the framebuffer
//! - Barycentric inside test, edges inclusive
//! - Zero-area triangles are skipped

mod framebuffer;
mod math;
mod render;
mod types;

pub use framebuffer::*;
pub use math::*;
pub use render::*;
pub use types::*;

/// Default framebuffer dimensions
pub const WIDTH: usize = 640;
pub const HEIGHT: usize = 480;
