//! Convolution kernels and neighborhood sampling.
//!
//! Kernels borrow their weights, so the fixed 3×3 matrices live in static
//! tables while Gaussian taps are built on the fly. Sampling clamps
//! coordinates to the image bounds (edge replication) and accumulates raw
//! per-channel sums; mapping sums back to pixel values is the caller's
//! business.

use crate::color::Color;
use crate::error::Result;
use crate::image::Image;
use num_traits::Num;

/// Accumulated kernel sums for one pixel, in source channel order:
/// blue, green, red.
pub type ChannelSums<T> = [T; 3];

/// Rectangular weight matrix with odd dimensions, row-major.
///
/// Row index maps to image rows (y), column index to image columns (x).
#[derive(Clone, Copy, Debug)]
pub struct Kernel<'a, T> {
    weights: &'a [T],
    width: usize,
    height: usize,
}

impl<'a, T: Copy> Kernel<'a, T> {
    /// Wrap a row-major weight slice.
    ///
    /// Panics when `weights.len() != width * height` or either dimension
    /// is even.
    pub fn new(weights: &'a [T], width: usize, height: usize) -> Self {
        assert_eq!(weights.len(), width * height, "kernel size mismatch");
        assert!(
            width % 2 == 1 && height % 2 == 1,
            "kernel dimensions must be odd"
        );
        Self {
            weights,
            width,
            height,
        }
    }

    /// A horizontal 1×N kernel.
    pub fn row(weights: &'a [T]) -> Self {
        Self::new(weights, weights.len(), 1)
    }

    /// A vertical N×1 kernel.
    pub fn column(weights: &'a [T]) -> Self {
        Self::new(weights, 1, weights.len())
    }

    /// Kernel width
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Kernel height
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
}

/// Accumulate `weight · channel` over the kernel window centered at `(x, y)`.
///
/// Sample coordinates are clamped to the image bounds, so border pixels
/// replicate outward and any odd kernel works on any image size; a 1×1
/// image contributes its single pixel to every tap. Sums are returned raw,
/// without range clamping.
pub fn sample_neighborhood<T>(
    kernel: &Kernel<'_, T>,
    image: &Image,
    x: usize,
    y: usize,
) -> ChannelSums<T>
where
    T: Num + Copy + From<u8>,
{
    let half_w = kernel.width / 2;
    let half_h = kernel.height / 2;
    let mut blue = T::zero();
    let mut green = T::zero();
    let mut red = T::zero();
    for ky in 0..kernel.height {
        let sy = clamp_index(y, ky, half_h, image.height());
        let row = image.row(sy);
        for kx in 0..kernel.width {
            let sx = clamp_index(x, kx, half_w, image.width());
            let px = row[sx];
            let weight = kernel.weights[ky * kernel.width + kx];
            blue = blue + weight * T::from(px.blue);
            green = green + weight * T::from(px.green);
            red = red + weight * T::from(px.red);
        }
    }
    [blue, green, red]
}

/// Clamp `pos + offset - half` into `[0, len - 1]`.
#[inline]
fn clamp_index(pos: usize, offset: usize, half: usize, len: usize) -> usize {
    (pos as isize + offset as isize - half as isize).clamp(0, len as isize - 1) as usize
}

/// Convolve `image` with `kernel`, mapping each pixel's channel sums to an
/// output pixel through `map`.
///
/// Output dimensions equal the input. Row loops run on rayon when the
/// `parallel` feature is enabled; the sequential path produces identical
/// output.
pub fn convolve<T, F>(image: &Image, kernel: &Kernel<'_, T>, map: F) -> Result<Image>
where
    T: Num + Copy + From<u8> + Send + Sync,
    F: Fn(ChannelSums<T>) -> Color + Send + Sync,
{
    let mut out = Image::new(image.width(), image.height())?;

    #[cfg(feature = "parallel")]
    convolve_rows_parallel(image, kernel, &map, &mut out);

    #[cfg(not(feature = "parallel"))]
    convolve_rows_sequential(image, kernel, &map, &mut out);

    Ok(out)
}

#[cfg(not(feature = "parallel"))]
fn convolve_rows_sequential<T, F>(image: &Image, kernel: &Kernel<'_, T>, map: &F, out: &mut Image)
where
    T: Num + Copy + From<u8>,
    F: Fn(ChannelSums<T>) -> Color,
{
    for y in 0..image.height() {
        for (x, px) in out.row_mut(y).iter_mut().enumerate() {
            *px = map(sample_neighborhood(kernel, image, x, y));
        }
    }
}

#[cfg(feature = "parallel")]
fn convolve_rows_parallel<T, F>(image: &Image, kernel: &Kernel<'_, T>, map: &F, out: &mut Image)
where
    T: Num + Copy + From<u8> + Send + Sync,
    F: Fn(ChannelSums<T>) -> Color + Send + Sync,
{
    use rayon::prelude::*;

    let width = image.width();
    out.data_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = map(sample_neighborhood(kernel, image, x, y));
            }
        });
}
