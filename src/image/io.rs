//! I/O helpers for BGR rasters and JSON reports.
//!
//! - `load_image`: decode a PNG/BMP/JPEG/... file into an owned [`Image`].
//! - `save_image`: encode an [`Image`], format picked from the extension.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::Image;
use crate::color::Color;
use crate::error::{Error, Result};
use image::{Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to 8-bit BGR.
pub fn load_image(path: &Path) -> Result<Image> {
    let decoded = image::open(path)
        .map_err(|source| Error::ReadImage {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    let width = decoded.width() as usize;
    let height = decoded.height() as usize;
    let mut rows = Vec::with_capacity(height);
    for y in 0..height {
        let mut row = Vec::with_capacity(width);
        for x in 0..width {
            let px = decoded.get_pixel(x as u32, y as u32);
            row.push(Color::new(px[2], px[1], px[0]));
        }
        rows.push(row);
    }
    Image::from_rows(rows)
}

/// Encode an image to `path`, creating parent directories first.
pub fn save_image(image: &Image, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(image.width() as u32, image.height() as u32);
    for y in 0..image.height() {
        for (x, px) in image.row(y).iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Rgb([px.red, px.green, px.blue]));
        }
    }
    out.save(path).map_err(|source| Error::WriteImage {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
