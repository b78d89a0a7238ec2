use crate::color::{clamp_channel, Color};
use crate::error::Result;
use crate::image::Image;
use crate::kernel::{convolve, ChannelSums, Kernel};

/// Separable Gaussian blur.
///
/// Horizontal pass first, then a vertical pass over the intermediate. Both
/// passes clamp and truncate per channel when writing, so near-saturated
/// pixels can differ from a single 2D convolution. `sigma` must be positive;
/// the factory guarantees this for parsed tokens.
pub fn gaussian_blur(image: &Image, sigma: f64) -> Result<Image> {
    let taps = gaussian_taps(sigma);
    let horizontal = convolve(image, &Kernel::row(&taps), clamp_sums)?;
    convolve(&horizontal, &Kernel::column(&taps), clamp_sums)
}

fn clamp_sums([blue, green, red]: ChannelSums<f64>) -> Color {
    Color::new(
        clamp_channel(blue),
        clamp_channel(green),
        clamp_channel(red),
    )
}

/// 1D Gaussian taps over `[-radius, radius]` with `radius = ⌊3σ⌋`,
/// normalized to sum to 1.
pub(crate) fn gaussian_taps(sigma: f64) -> Vec<f64> {
    let radius = (3.0 * sigma).floor() as isize;
    let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * sigma);
    let two_sigma_sq = 2.0 * sigma * sigma;
    let mut taps: Vec<f64> = (-radius..=radius)
        .map(|i| norm * (-((i * i) as f64) / two_sigma_sq).exp())
        .collect();
    let sum: f64 = taps.iter().sum();
    for tap in &mut taps {
        *tap /= sum;
    }
    taps
}
