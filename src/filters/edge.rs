use super::grayscale;
use crate::color::{clamp_channel, Color};
use crate::error::Result;
use crate::image::Image;
use crate::kernel::{convolve, Kernel};

const LAPLACIAN_WEIGHTS: [i32; 9] = [0, -1, 0, -1, 4, -1, 0, -1, 0];

/// Laplacian edge map over the grayscaled input, thresholded to black/white.
///
/// The clamped response is compared with `threshold · 255`; hits become pure
/// white, everything else pure black. After grayscaling all channels are
/// identical, so only the first accumulated channel is inspected.
pub fn edge_detection(image: &Image, threshold: f64) -> Result<Image> {
    let gray = grayscale::grayscale(image)?;
    let kernel = Kernel::new(&LAPLACIAN_WEIGHTS, 3, 3);
    let cutoff = threshold * 255.0;
    convolve(&gray, &kernel, |[blue, _, _]| {
        if f64::from(clamp_channel(blue)) >= cutoff {
            Color::WHITE
        } else {
            Color::BLACK
        }
    })
}
