//! Icon generation
//!
//! Renders one SVG source into a PNG per configured size:
//! 1. Check the source exists
//! 2. Select the first available backend
//! 3. Parse the SVG once
//! 4. Rasterize and write each size in order, stopping at the first failure
//!
//! Files written before a failure are left in place.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::ImageFormat;
use log::{debug, info};

use crate::backend::{self, Backend};
use crate::error::{GenerationError, IconError};

/// Source file read when none is given
pub const DEFAULT_SOURCE: &str = "icon.svg";

/// Browser extension icon sizes
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Output file name prefix
pub const DEFAULT_PREFIX: &str = "icon";

/// Options for icon generation
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// SVG source file (default: `icon.svg`)
    pub source: PathBuf,
    /// Square output sizes, rendered in order (default: 16, 48, 128)
    pub sizes: Vec<u32>,
    /// Directory the PNG files are written to (default: current directory)
    pub output_dir: PathBuf,
    /// File name prefix; the size and `.png` are appended (default: `icon`)
    pub prefix: String,
    /// Load system fonts so `<text>` elements render (default: true)
    pub load_system_fonts: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            sizes: DEFAULT_SIZES.to_vec(),
            output_dir: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            load_system_fonts: true,
        }
    }
}

impl GenerateOptions {
    /// Full path of the PNG written for `size`
    pub fn output_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(output_file_name(&self.prefix, size))
    }
}

/// One PNG file written by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Name of the backend that rendered the icons
    pub backend: &'static str,
    /// Written files, in the order of the configured sizes
    pub icons: Vec<GeneratedIcon>,
    /// Directory the files were written to
    pub output_dir: PathBuf,
}

/// Progress events reported while a run is in flight
#[derive(Debug)]
pub enum Progress<'a> {
    /// A backend was selected; rendering is about to start
    Started { backend: &'static str },
    /// A file was written
    Generated(&'a GeneratedIcon),
}

/// File name for the icon of a given size, e.g. `icon48.png`
pub fn output_file_name(prefix: &str, size: u32) -> String {
    format!("{prefix}{size}.png")
}

/// Read and parse an SVG file.
///
/// Relative references inside the SVG (images, stylesheets) resolve against
/// the file's own directory.
pub fn load_tree(path: &Path, load_system_fonts: bool) -> Result<usvg::Tree, GenerationError> {
    let data = fs::read(path).map_err(|source| GenerationError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut opt = usvg::Options::default();
    opt.resources_dir = fs::canonicalize(path)
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));
    if load_system_fonts {
        Arc::make_mut(&mut opt.fontdb).load_system_fonts();
    }

    let tree = usvg::Tree::from_data(&data, &opt)?;
    debug!(
        "parsed {} ({}x{})",
        path.display(),
        tree.size().width(),
        tree.size().height()
    );
    Ok(tree)
}

/// Generate every configured icon with the first available backend
pub fn generate(
    options: &GenerateOptions,
    backends: &[Box<dyn Backend>],
) -> Result<GenerateReport, IconError> {
    generate_with(options, backends, |_| {})
}

/// Like [`generate`], calling `on_progress` as the run advances
pub fn generate_with<F>(
    options: &GenerateOptions,
    backends: &[Box<dyn Backend>],
    mut on_progress: F,
) -> Result<GenerateReport, IconError>
where
    F: FnMut(Progress<'_>),
{
    if !options.source.exists() {
        return Err(IconError::MissingInput {
            path: options.source.clone(),
        });
    }

    let backend = backend::select(backends).ok_or_else(|| IconError::MissingBackend {
        tried: backends.iter().map(|b| b.name()).collect(),
    })?;
    info!(
        "rendering {} with the {} backend",
        options.source.display(),
        backend.name()
    );
    on_progress(Progress::Started {
        backend: backend.name(),
    });

    let tree = load_tree(&options.source, options.load_system_fonts)?;

    let mut icons = Vec::with_capacity(options.sizes.len());
    for &size in &options.sizes {
        let icon = render_icon(backend, &tree, size, options.output_path(size))?;
        on_progress(Progress::Generated(&icon));
        icons.push(icon);
    }

    Ok(GenerateReport {
        backend: backend.name(),
        icons,
        output_dir: options.output_dir.clone(),
    })
}

/// Rasterize one size and write it, overwriting any existing file
fn render_icon(
    backend: &dyn Backend,
    tree: &usvg::Tree,
    size: u32,
    path: PathBuf,
) -> Result<GeneratedIcon, GenerationError> {
    let image = backend
        .rasterize(tree, size)
        .map_err(|source| GenerationError::Render { size, source })?;

    let (width, height) = image.dimensions();
    if (width, height) != (size, size) {
        return Err(GenerationError::Dimensions {
            size,
            width,
            height,
        });
    }

    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| GenerationError::Write {
            path: path.clone(),
            source,
        })?;
    debug!("wrote {}", path.display());

    Ok(GeneratedIcon { size, path })
}
