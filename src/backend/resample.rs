//! Two-step fallback: render at intrinsic size, then resize

use image::RgbaImage;

use super::Backend;
use crate::error::RenderError;

/// Renders the tree once at the size the SVG declares, then resizes the
/// raster to the requested size with a Lanczos3 filter.
///
/// Used when direct rendering is not compiled in. Output quality depends on
/// the declared size: tiny declared sizes upscale blurrily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResampleBackend;

impl Backend for ResampleBackend {
    fn name(&self) -> &'static str {
        "resample"
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "resample")
    }

    #[cfg(feature = "resample")]
    fn rasterize(&self, tree: &usvg::Tree, size: u32) -> Result<RgbaImage, RenderError> {
        use image::imageops::{self, FilterType};
        use resvg::tiny_skia::{Pixmap, Transform};

        if size == 0 {
            return Err(RenderError::Canvas {
                width: 0,
                height: 0,
            });
        }

        let intrinsic = tree.size().to_int_size();
        let mut pixmap = Pixmap::new(intrinsic.width(), intrinsic.height()).ok_or(
            RenderError::Canvas {
                width: intrinsic.width(),
                height: intrinsic.height(),
            },
        )?;
        resvg::render(tree, Transform::identity(), &mut pixmap.as_mut());
        let drawing = super::pixmap_to_image(&pixmap);

        let (width, height) =
            super::fit_within(drawing.width() as f32, drawing.height() as f32, size);
        log::debug!(
            "resample: {}x{} -> {width}x{height} on {size}x{size}",
            drawing.width(),
            drawing.height()
        );

        let resized = imageops::resize(&drawing, width, height, FilterType::Lanczos3);
        if (width, height) == (size, size) {
            return Ok(resized);
        }

        let mut canvas = RgbaImage::new(size, size);
        imageops::overlay(
            &mut canvas,
            &resized,
            i64::from((size - width) / 2),
            i64::from((size - height) / 2),
        );
        Ok(canvas)
    }

    #[cfg(not(feature = "resample"))]
    fn rasterize(&self, _tree: &usvg::Tree, _size: u32) -> Result<RgbaImage, RenderError> {
        Err(RenderError::Unavailable(self.name()))
    }
}
