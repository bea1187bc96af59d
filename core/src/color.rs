use image::Rgba;
use palette::{Srgb, Srgba};

// 8-bit RGBA color. The default is fully transparent black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const SADDLE_BROWN: Color = Color::rgb(139, 69, 19);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    // Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    // Opaque color from float channels, truncated and saturated into 0..=255
    #[inline]
    pub fn from_channels(r: f32, g: f32, b: f32) -> Self {
        Self::rgb(r as u8, g as u8, b as u8)
    }

    // Grey level for a unit value: round(clamp(v, 0, 1) * 255) on every channel
    #[inline]
    pub fn gray(value: f32) -> Self {
        let level = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(level, level, level)
    }

    // Scale the RGB channels by `factor`, truncating. The result is opaque.
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self::from_channels(
            self.r as f32 * factor,
            self.g as f32 * factor,
            self.b as f32 * factor,
        )
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Srgb<u8>> for Color {
    fn from(c: Srgb<u8>) -> Self {
        Color::rgb(c.red, c.green, c.blue)
    }
}

impl From<Srgba<u8>> for Color {
    fn from(c: Srgba<u8>) -> Self {
        Color::rgba(c.color.red, c.color.green, c.color.blue, c.alpha)
    }
}

impl From<Color> for Srgba<u8> {
    fn from(c: Color) -> Self {
        Srgba::new(c.r, c.g, c.b, c.a)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba(c.to_array())
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::rgba(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use palette::named;

    #[test]
    fn default_is_transparent() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn named_constants_match_palette() {
        assert_eq!(Color::from(named::BLUE), Color::BLUE);
        assert_eq!(Color::from(named::YELLOW), Color::YELLOW);
        assert_eq!(Color::from(named::GREEN), Color::GREEN);
        assert_eq!(Color::from(named::SADDLEBROWN), Color::SADDLE_BROWN);
        assert_eq!(Color::from(named::WHITE), Color::WHITE);
    }

    #[test]
    fn scaled_truncates() {
        let c = Color::YELLOW.scaled(0.9);
        // 255 * 0.9 = 229.5
        assert_eq!(c, Color::rgb(229, 229, 0));
    }

    #[test]
    fn channels_saturate() {
        assert_eq!(Color::from_channels(-3.0, 300.0, 12.9), Color::rgb(0, 255, 12));
    }

    #[test]
    fn gray_rounds_and_clamps() {
        assert_eq!(Color::gray(0.5), Color::rgb(128, 128, 128));
        assert_eq!(Color::gray(1.7), Color::WHITE);
        assert_eq!(Color::gray(-0.2), Color::BLACK);
    }
}
