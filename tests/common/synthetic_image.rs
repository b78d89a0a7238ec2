use raster_filters::{Color, Image};

/// Generates a diagonal gradient with distinct per-channel values.
pub fn gradient_image(width: usize, height: usize) -> Image {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let v = ((x * 255) / width + (y * 255) / height) / 2;
                    Color::new(v as u8, (v / 2) as u8, 255 - v as u8)
                })
                .collect()
        })
        .collect();
    Image::from_rows(rows).expect("gradient rows are rectangular")
}

/// Generates an image where every pixel carries a unique channel pattern,
/// useful for asserting exact pixel movement.
pub fn numbered_image(width: usize, height: usize) -> Image {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(width * height <= 256, "pattern only stays unique up to 256 pixels");

    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let v = (y * width + x) as u8;
                    Color::new(v, v.wrapping_mul(3), v.wrapping_add(7))
                })
                .collect()
        })
        .collect();
    Image::from_rows(rows).expect("numbered rows are rectangular")
}

/// Generates a two-tone image split at `split` columns: dark left, bright
/// right. Handy for edge detection cases.
pub fn vertical_step_image(width: usize, height: usize, split: usize) -> Image {
    assert!(split < width, "split column must be inside the image");

    let rows = (0..height)
        .map(|_| {
            (0..width)
                .map(|x| {
                    if x < split {
                        Color::new(20, 20, 20)
                    } else {
                        Color::new(230, 230, 230)
                    }
                })
                .collect()
        })
        .collect();
    Image::from_rows(rows).expect("step rows are rectangular")
}
