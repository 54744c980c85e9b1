//! One paint cycle: clear, fill, present

use crate::present::Presenter;
use crate::rasterizer::{rasterize_triangle, Framebuffer, RasterStats};
use crate::scene::Scene;

/// Run clear -> draw -> present once.
///
/// The framebuffer is resized to the scene first, so the presented frame
/// always matches the scene dimensions.
pub fn paint<P: Presenter>(
    fb: &mut Framebuffer,
    scene: &Scene,
    presenter: &mut P,
) -> Result<RasterStats, P::Error> {
    fb.resize(scene.width, scene.height);
    fb.clear(scene.background);
    let mut stats = RasterStats::default();
    for shape in &scene.triangles {
        stats += rasterize_triangle(fb, &shape.triangle(), shape.color);
    }
    presenter.present(fb.raw_view())?;

    log::debug!(
        "painted {} triangles: {} tested, {} written, {} degenerate",
        scene.triangles.len(),
        stats.tested,
        stats.written,
        stats.degenerate
    );
    Ok(stats)
}
