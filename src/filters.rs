//! The filter set and the pipeline runner.

pub mod blur;
pub mod crop;
pub mod edge;
pub mod factory;
pub mod grayscale;
pub mod negative;
pub mod sharpen;

pub use self::factory::{create_filter, FilterToken};

use crate::error::Result;
use crate::image::Image;
use log::debug;
use std::time::Instant;

/// The closed set of pixel transformations this engine ships.
///
/// Variants can be built directly, or through [`create_filter`] when
/// starting from parsed command tokens; the factory validates parameter
/// domains, so every filter it hands out applies cleanly to any valid image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Filter {
    /// Invert every channel.
    Negative,
    /// Collapse to luma, replicated across all three channels.
    Grayscale,
    /// Fixed 3×3 sharpening kernel, per channel.
    Sharpen,
    /// Laplacian edge map thresholded to black/white. `threshold` scales
    /// against 255; values outside `[0, 1]` force a uniform output.
    EdgeDetection { threshold: f64 },
    /// Separable Gaussian blur with standard deviation `sigma`.
    GaussianBlur { sigma: f64 },
    /// Keep the bottom-left `width × height` window of the image.
    Crop { width: usize, height: usize },
}

impl Filter {
    /// Run the transformation, producing a fresh image.
    pub fn apply(&self, image: &Image) -> Result<Image> {
        match *self {
            Filter::Negative => negative::negative(image),
            Filter::Grayscale => grayscale::grayscale(image),
            Filter::Sharpen => sharpen::sharpen(image),
            Filter::EdgeDetection { threshold } => edge::edge_detection(image, threshold),
            Filter::GaussianBlur { sigma } => blur::gaussian_blur(image, sigma),
            Filter::Crop { width, height } => crop::crop(image, width, height),
        }
    }

    /// Stable name for logs and reports; matches the command-line flag.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Negative => "-neg",
            Filter::Grayscale => "-gs",
            Filter::Sharpen => "-sharp",
            Filter::EdgeDetection { .. } => "-edge",
            Filter::GaussianBlur { .. } => "-blur",
            Filter::Crop { .. } => "-crop",
        }
    }
}

/// Apply `filters` left to right, consuming the input image.
pub fn apply_pipeline(image: Image, filters: &[Filter]) -> Result<Image> {
    let mut current = image;
    for filter in filters {
        let started = Instant::now();
        current = filter.apply(&current)?;
        debug!(
            "applied {} -> {}x{} in {:.3} ms",
            filter.name(),
            current.width(),
            current.height(),
            started.elapsed().as_secs_f64() * 1e3
        );
    }
    Ok(current)
}
