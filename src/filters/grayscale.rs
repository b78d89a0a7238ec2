use crate::color::Color;
use crate::error::Result;
use crate::image::Image;

// Perceptual luma weights in thousandths. They sum to exactly 1000, so the
// integer mix below is the exact truncation of 0.114·b + 0.587·g + 0.299·r
// and gray pixels are fixed points.
const BLUE_WEIGHT: u32 = 114;
const GREEN_WEIGHT: u32 = 587;
const RED_WEIGHT: u32 = 299;

/// Replace every pixel with its luma, replicated across all three channels.
/// Strictly idempotent.
pub fn grayscale(image: &Image) -> Result<Image> {
    let mut out = Image::new(image.width(), image.height())?;
    for y in 0..image.height() {
        let src = image.row(y);
        for (dst, px) in out.row_mut(y).iter_mut().zip(src) {
            let luma = luma_of(*px);
            *dst = Color::new(luma, luma, luma);
        }
    }
    Ok(out)
}

/// Weighted channel mix `0.114·blue + 0.587·green + 0.299·red`, truncated.
#[inline]
pub(crate) fn luma_of(px: Color) -> u8 {
    let mix = BLUE_WEIGHT * u32::from(px.blue)
        + GREEN_WEIGHT * u32::from(px.green)
        + RED_WEIGHT * u32::from(px.red);
    (mix / 1000) as u8
}
