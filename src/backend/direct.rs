//! Direct SVG-to-raster rendering with resvg

use image::RgbaImage;

use super::Backend;
use crate::error::RenderError;

/// Renders the tree straight onto a canvas of the requested size.
///
/// The drawing is scaled uniformly to fit and centered; any uncovered area
/// stays transparent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectBackend;

impl Backend for DirectBackend {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "direct")
    }

    #[cfg(feature = "direct")]
    fn rasterize(&self, tree: &usvg::Tree, size: u32) -> Result<RgbaImage, RenderError> {
        use resvg::tiny_skia::{Pixmap, Transform};

        let mut pixmap = Pixmap::new(size, size).ok_or(RenderError::Canvas {
            width: size,
            height: size,
        })?;

        let view = tree.size();
        let side = size as f32;
        let scale = (side / view.width()).min(side / view.height());
        let tx = (side - view.width() * scale) / 2.0;
        let ty = (side - view.height() * scale) / 2.0;

        log::debug!(
            "direct: {}x{} -> {size}x{size} (scale {scale:.4})",
            view.width(),
            view.height()
        );

        resvg::render(
            tree,
            Transform::from_row(scale, 0.0, 0.0, scale, tx, ty),
            &mut pixmap.as_mut(),
        );

        Ok(super::pixmap_to_image(&pixmap))
    }

    #[cfg(not(feature = "direct"))]
    fn rasterize(&self, _tree: &usvg::Tree, _size: u32) -> Result<RgbaImage, RenderError> {
        Err(RenderError::Unavailable(self.name()))
    }
}
