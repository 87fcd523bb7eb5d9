//! Error types for icon generation

use std::path::PathBuf;

use thiserror::Error;

/// Top-level failure of a generation run.
///
/// The first two variants are raised before any file is written.
#[derive(Error, Debug)]
pub enum IconError {
    #[error("{} not found", path.display())]
    MissingInput { path: PathBuf },

    #[error("no rendering backend available (tried: {})", tried.join(", "))]
    MissingBackend { tried: Vec<&'static str> },

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Failure while parsing, rendering or writing one of the icons.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse SVG: {0}")]
    Parse(#[from] usvg::Error),

    #[error("failed to render {size}x{size} icon: {source}")]
    Render { size: u32, source: RenderError },

    #[error("backend produced a {width}x{height} image for size {size}")]
    Dimensions { size: u32, width: u32, height: u32 },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Failure inside a backend.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("backend '{0}' is not compiled in")]
    Unavailable(&'static str),
}
