use crate::error::Result;
use crate::image::Image;

/// Keep the bottom `height` rows and left `width` columns of the image.
///
/// Targets larger than the source clamp to the source size, so oversize
/// crops return the image unchanged. A zero target is rejected the same way
/// zero-size image construction is.
pub fn crop(image: &Image, width: usize, height: usize) -> Result<Image> {
    let out_w = width.min(image.width());
    let out_h = height.min(image.height());
    let mut out = Image::new(out_w, out_h)?;
    let first_row = image.height() - out_h;
    for y in 0..out_h {
        let src = &image.row(first_row + y)[..out_w];
        out.row_mut(y).copy_from_slice(src);
    }
    Ok(out)
}
