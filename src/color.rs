//! 8-bit RGB color with saturating arithmetic.

/// RGB color with channels in `[0, 255]`.
///
/// Both [`Color::add`] and [`Color::scale`] clamp to the channel range, so
/// shading terms can be accumulated without overflow checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Black, the neutral element of [`Color::add`].
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// White
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise saturating sum.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Color) -> Color {
        Color::new(
            self.r.saturating_add(other.r),
            self.g.saturating_add(other.g),
            self.b.saturating_add(other.b),
        )
    }

    /// Multiply every channel by `factor`, rounding half to even and clamping
    /// the result to `[0, 255]`. A NaN factor yields black.
    pub fn scale(self, factor: f64) -> Color {
        Color::new(
            scale_channel(self.r, factor),
            scale_channel(self.g, factor),
            scale_channel(self.b, factor),
        )
    }

    /// Write the color into the first three bytes of `pixel`.
    pub fn write_to(self, pixel: &mut [u8]) {
        pixel[0] = self.r;
        pixel[1] = self.g;
        pixel[2] = self.b;
    }
}

fn scale_channel(channel: u8, factor: f64) -> u8 {
    let scaled = (f64::from(channel) * factor).round_ties_even();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_saturates() {
        let sum = Color::new(255, 200, 10).add(Color::new(100, 100, 100));
        assert_eq!(sum, Color::new(255, 255, 110));
    }

    #[test]
    fn scale_clamps_both_ends() {
        let color = Color::new(100, 200, 0);
        assert_eq!(color.scale(3.0), Color::new(255, 255, 0));
        assert_eq!(color.scale(-2.0), Color::BLACK);
        assert_eq!(color.scale(f64::INFINITY), Color::new(255, 255, 0));
        assert_eq!(color.scale(f64::NAN), Color::BLACK);
    }

    #[test]
    fn scale_rounds_half_to_even() {
        // 5 * 0.5 = 2.5 -> 2, 7 * 0.5 = 3.5 -> 4
        assert_eq!(Color::new(5, 7, 1).scale(0.5), Color::new(2, 4, 0));
    }

    #[test]
    fn write_to_leaves_padding_untouched() {
        let mut pixel = [9u8; 4];
        Color::new(1, 2, 3).write_to(&mut pixel);
        assert_eq!(pixel, [1, 2, 3, 9]);
    }
}
