#![doc = include_str!("../README.md")]

pub mod color;
pub mod error;
pub mod filters;
pub mod image;
pub mod kernel;
pub mod parse;

// --- High-level re-exports -------------------------------------------------

// Main entry points: image container + filter set.
pub use crate::color::{clamp_channel, Color};
pub use crate::error::{Error, Result};
pub use crate::filters::{apply_pipeline, create_filter, Filter, FilterToken};
pub use crate::image::Image;

// Sampling surface for custom kernels.
pub use crate::kernel::{convolve, sample_neighborhood, ChannelSums, Kernel};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use raster_filters::prelude::*;
///
/// let image = Image::new(8, 8)?;
/// let out = Filter::Negative.apply(&image)?;
/// assert_eq!((out.width(), out.height()), (8, 8));
/// # Ok::<(), raster_filters::Error>(())
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::Result;
    pub use crate::filters::{apply_pipeline, create_filter, Filter, FilterToken};
    pub use crate::image::Image;
}
