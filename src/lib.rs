//! # extension-icons
//!
//! Render an SVG icon into the PNG sizes a browser extension needs.
//!
//! ## Features
//!
//! - **Backend selection**: tries each rendering backend in priority order and
//!   uses the first one compiled into the build (`direct`, then `resample`)
//! - **Fail fast**: the first size that fails stops the run; files already
//!   written are kept
//!
//! ## Example
//!
//! ```rust,ignore
//! use extension_icons::{GenerateOptions, backend, generate};
//!
//! let report = generate(&GenerateOptions::default(), &backend::candidates()).unwrap();
//! for icon in &report.icons {
//!     println!("{}", icon.path.display());
//! }
//! ```

pub mod backend;
pub mod error;
pub mod generate;

// Re-export commonly used items
pub use backend::{Backend, DirectBackend, ResampleBackend};
pub use error::{GenerationError, IconError, RenderError};
pub use generate::{
    DEFAULT_PREFIX, DEFAULT_SIZES, DEFAULT_SOURCE, GenerateOptions, GenerateReport, GeneratedIcon,
    Progress, generate, generate_with, load_tree, output_file_name,
};
