//! Crate-wide error type and result alias.

use image::ImageError;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can fail while building images, constructing filters
/// from tokens, or moving rasters through the codec.
#[derive(Debug, Error)]
pub enum Error {
    /// Filter name outside the supported set.
    #[error("not a correct filter name: {name}")]
    UnknownFilter { name: String },

    /// Filter flag followed by the wrong number of parameters.
    #[error("{name} expects {expected} parameter(s), got {found}")]
    ParameterCount {
        name: String,
        expected: usize,
        found: usize,
    },

    /// Filter parameter failed numeric parsing or validation.
    #[error("invalid parameter {value:?} for {name}: expected {expected}")]
    InvalidParameter {
        name: String,
        value: String,
        expected: &'static str,
    },

    /// Command-line parameter appeared before any filter flag.
    #[error("parameter {value:?} appears before any filter flag")]
    DanglingParameter { value: String },

    /// Image dimensions must both be at least one pixel.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Pixel row collection was empty.
    #[error("empty pixel rows")]
    EmptyPixels,

    /// Pixel rows had differing lengths.
    #[error("row {row} has {found} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Coordinates outside the image bounds.
    #[error("coordinates ({x}, {y}) out of range for {width}x{height} image")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Raster decode failure.
    #[error("failed to read {}: {source}", path.display())]
    ReadImage { path: PathBuf, source: ImageError },

    /// Raster encode failure.
    #[error("failed to write {}: {source}", path.display())]
    WriteImage { path: PathBuf, source: ImageError },

    /// Filesystem failure around codec or report output.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON serialization failure for report output.
    #[error("failed to encode JSON for {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
