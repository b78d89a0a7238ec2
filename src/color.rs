//! BGR pixel type and the channel clamp every filter writes through.

/// One 8-bit BGR pixel. Channel order matches the raster layout this engine
/// grew around: blue first, then green, then red.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    /// Blue channel
    pub blue: u8,
    /// Green channel
    pub green: u8,
    /// Red channel
    pub red: u8,
}

impl Color {
    /// Pure white.
    pub const WHITE: Color = Color {
        blue: 255,
        green: 255,
        red: 255,
    };

    /// Pure black.
    pub const BLACK: Color = Color {
        blue: 0,
        green: 0,
        red: 0,
    };

    /// Construct a pixel from its three channels.
    #[inline]
    pub fn new(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red }
    }
}

/// Clamp a channel value into `[0, 255]` and truncate to `u8`.
///
/// Kernel sums overshoot in both directions; filters funnel every
/// per-channel result through this before writing a pixel.
#[inline]
pub fn clamp_channel<T: Into<f64>>(value: T) -> u8 {
    value.into().clamp(0.0, 255.0) as u8
}
