//! Barcode Raster Renderer
//!
//! This crate renders the module rows produced by a barcode symbology encoder
//! into a monochrome raster image sized for label stock. Geometry is given in
//! millimeters plus a target resolution in dots per inch; the output is an
//! 8-bit grayscale buffer holding only the logical values 0 and 1, ready for
//! a PNG encoder or a raster label printer pipeline.
//!
//! # Example
//!
//! ```rust,no_run
//! use barcode_raster::{to_black_on_white, Geometry, Renderer};
//!
//! let geometry = Geometry::new()
//!     .module_width(0.33)
//!     .module_height(25.9)
//!     .quiet_zone(3.63)
//!     .dpi(300.0);
//! let renderer = Renderer::new(geometry);
//!
//! // Module rows come from a symbology encoder; any equal-length rows of
//! // '0'/'1' characters will do.
//! let canvas = renderer.render(&["101100111"]).unwrap();
//! to_black_on_white(&canvas).save("label.png").unwrap();
//! ```

mod error;
mod geometry;
mod renderer;
mod utils;

pub use crate::{
    error::Error,
    geometry::{mm_to_px, Geometry},
    renderer::Renderer,
    utils::{pack_rows, to_black_on_white},
};

/// Type alias for 1-bit packed raster data consumed by label printers.
///
/// Each inner `Vec<u8>` is a single row of pixels with 8 pixels packed into
/// each byte, most significant bit first. The outer Vec holds the rows from
/// top to bottom. [`pack_rows`] produces this shape from a rendered canvas.
pub type Matrix = Vec<Vec<u8>>;

/// Millimeters per inch, the conversion base for all geometry math.
pub const MM_PER_INCH: f64 = 25.4;

/// Default rendering resolution in dots per inch.
///
/// At 25.4 dpi one millimeter corresponds to one pixel, which keeps ad hoc
/// geometry readable. Label printers typically want 300.0 instead.
pub const DEFAULT_DPI: f64 = 25.4;
