use crate::color::{clamp_channel, Color};
use crate::error::Result;
use crate::image::Image;
use crate::kernel::{convolve, Kernel};

const SHARPEN_WEIGHTS: [i32; 9] = [0, -1, 0, -1, 5, -1, 0, -1, 0];

/// Sharpen with the fixed 3×3 kernel, clamping each channel sum.
pub fn sharpen(image: &Image) -> Result<Image> {
    let kernel = Kernel::new(&SHARPEN_WEIGHTS, 3, 3);
    convolve(image, &kernel, |[blue, green, red]| {
        Color::new(
            clamp_channel(blue),
            clamp_channel(green),
            clamp_channel(red),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_image_is_unchanged() {
        // kernel weights sum to 1
        let px = Color::new(100, 120, 140);
        let img = Image::from_rows(vec![vec![px; 4]; 3]).unwrap();
        let out = sharpen(&img).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn center_pixel_gets_boosted() {
        let mut img = Image::new(3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                img.set(x, y, Color::new(10, 10, 10)).unwrap();
            }
        }
        img.set(1, 1, Color::new(50, 50, 50)).unwrap();
        let out = sharpen(&img).unwrap();
        // 5·50 - 4·10 = 210
        assert_eq!(out.get(1, 1).unwrap(), Color::new(210, 210, 210));
    }

    #[test]
    fn sums_clamp_at_both_ends() {
        let mut bright = Image::new(3, 3).unwrap();
        bright.set(1, 1, Color::new(200, 200, 200)).unwrap();
        let out = sharpen(&bright).unwrap();
        // 5·200 with black neighbors
        assert_eq!(out.get(1, 1).unwrap(), Color::WHITE);
        // -200 at a straight neighbor of the bright pixel
        assert_eq!(out.get(0, 1).unwrap(), Color::BLACK);
    }
}
