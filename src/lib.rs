//! trifill: minimal software triangle rasterizer
//!
//! - Owned framebuffer with uniform clear and per-pixel writes
//! - Bounding-box scan with a barycentric inside test
//! - Presentation behind a narrow trait (window, PNG or in-memory)

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod frame;
pub mod present;
pub mod rasterizer;
pub mod scene;

pub use frame::paint;
