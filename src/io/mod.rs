//! Input/output: image decoding, rendering, errors and the command line

/// Command-line interface and batch processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Raster decoding into open-pixel fields
pub mod image;
/// Batch progress display
pub mod progress;
/// Graph and path overlays
pub mod rendering;
