//! Owned BGR raster image in row-major layout.

pub mod io;

use crate::color::Color;
use crate::error::{Error, Result};

/// Owned two-dimensional BGR raster.
///
/// Pixels are stored row-major with no padding between rows. Both dimensions
/// are at least one pixel; the constructors enforce this, so every
/// constructed image has addressable content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    data: Vec<Color>,
}

impl Image {
    /// Construct a `width × height` image filled with black pixels.
    ///
    /// Fails with [`Error::InvalidDimensions`] when either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![Color::default(); width * height],
        })
    }

    /// Build an image from pixel rows, top to bottom.
    ///
    /// Rows must be non-empty and of equal length.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(Error::EmptyPixels);
        }
        let width = rows[0].len();
        for (row, pixels) in rows.iter().enumerate() {
            if pixels.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    found: pixels.len(),
                });
            }
        }
        if width == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            data.extend(row);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// Fails with [`Error::OutOfRange`] outside the image bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Result<Color> {
        self.check_bounds(x, y)?;
        Ok(self.data[self.idx(x, y)])
    }

    /// Overwrite the pixel at column `x`, row `y`.
    ///
    /// Fails with [`Error::OutOfRange`] outside the image bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        self.check_bounds(x, y)?;
        let i = self.idx(x, y);
        self.data[i] = color;
        Ok(())
    }

    /// Borrow row `y` as a contiguous pixel slice.
    ///
    /// Panics when `y >= height()`; callers iterate `0..height()`.
    #[inline]
    pub fn row(&self, y: usize) -> &[Color] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Mutable row access. Panics when `y >= height()`.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [Color] {
        let start = y * self.width;
        let end = start + self.width;
        &mut self.data[start..end]
    }

    /// Mutable view of the whole backing buffer, row-major.
    #[cfg(feature = "parallel")]
    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [Color] {
        &mut self.data
    }
}
