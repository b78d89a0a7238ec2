use crate::color::Color;
use crate::error::Result;
use crate::image::Image;

/// Invert every channel: `c -> 255 - c`. Applying twice restores the input.
pub fn negative(image: &Image) -> Result<Image> {
    let mut out = Image::new(image.width(), image.height())?;
    for y in 0..image.height() {
        let src = image.row(y);
        for (dst, px) in out.row_mut(y).iter_mut().zip(src) {
            *dst = Color::new(255 - px.blue, 255 - px.green, 255 - px.red);
        }
    }
    Ok(out)
}
