//! Rendering backends
//!
//! A backend turns a parsed SVG tree into an RGBA raster of an exact size.
//! Two backends exist, tried in this order:
//!
//! 1. `direct`: resvg renders straight onto a canvas of the target size
//! 2. `resample`: resvg renders at the drawing's intrinsic size, then the
//!    image crate resizes the result (Lanczos3)
//!
//! Availability is decided at build time by the cargo feature of the same
//! name. Backends that are not compiled in stay in the candidate list so the
//! caller can report what was tried.

mod direct;
mod resample;

use image::RgbaImage;

use crate::error::RenderError;

pub use direct::DirectBackend;
pub use resample::ResampleBackend;

/// Something that can rasterize an SVG tree at a given square size.
pub trait Backend {
    /// Short name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Whether the underlying renderer is compiled into this build
    fn is_available(&self) -> bool;

    /// Render `tree` into a `size` x `size` image
    fn rasterize(&self, tree: &usvg::Tree, size: u32) -> Result<RgbaImage, RenderError>;
}

/// All known backends, in priority order
pub fn candidates() -> Vec<Box<dyn Backend>> {
    vec![Box::new(DirectBackend), Box::new(ResampleBackend)]
}

/// Pick the first available backend
pub fn select(candidates: &[Box<dyn Backend>]) -> Option<&dyn Backend> {
    candidates
        .iter()
        .map(|backend| backend.as_ref())
        .find(|backend| backend.is_available())
}

/// Copy a premultiplied tiny-skia pixmap into a straight-alpha RGBA image
#[cfg(any(feature = "direct", feature = "resample"))]
fn pixmap_to_image(pixmap: &resvg::tiny_skia::Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}

/// Largest (width, height) with the same aspect ratio that fits in a
/// `size` x `size` square. `size` must be at least 1.
pub(crate) fn fit_within(width: f32, height: f32, size: u32) -> (u32, u32) {
    if width <= 0.0 || height <= 0.0 {
        return (size, size);
    }

    let scale = (size as f32 / width).min(size as f32 / height);
    let fit = |v: f32| ((v * scale).round() as u32).clamp(1, size);
    (fit(width), fit(height))
}
