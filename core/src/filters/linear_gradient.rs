use tracing::debug;

use super::NoiseFilter;
use crate::color::Color;
use crate::grid::Grid;

// Blends every cell from `start_color` towards `end_color` by its value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradientFilter {
    pub start_color: Color,
    pub end_color: Color,
    // How much of the start color to use, in [0.0, 1.0]; 1.0 by default
    pub start_percentage: f32,
}

impl Default for LinearGradientFilter {
    fn default() -> Self {
        Self {
            start_color: Color::BLACK,
            end_color: Color::RED,
            start_percentage: 1.0,
        }
    }
}

impl LinearGradientFilter {
    pub fn new(start_color: Color, end_color: Color) -> Self {
        Self {
            start_color,
            end_color,
            ..Self::default()
        }
    }

    pub fn with_start_percentage(mut self, start_percentage: f32) -> Self {
        self.start_percentage = start_percentage;
        self
    }

    // Only the value is rescaled by start_percentage, the start weight is not
    #[inline]
    pub fn color_for(&self, value: f32) -> Color {
        let u = self.start_percentage - value;
        let t = value * self.start_percentage;
        let (s, e) = (self.start_color, self.end_color);
        Color::from_channels(
            u * s.r as f32 + t * e.r as f32,
            u * s.g as f32 + t * e.g as f32,
            u * s.b as f32 + t * e.b as f32,
        )
    }
}

impl NoiseFilter<f32, Color> for LinearGradientFilter {
    fn filter(&self, field: &Grid<f32>) -> Grid<Color> {
        debug!(
            width = field.width(),
            height = field.height(),
            start_percentage = self.start_percentage,
            "applying linear gradient"
        );
        field.map(|&v| self.color_for(v))
    }
}

#[cfg(test)]
mod tests {
    use super::LinearGradientFilter;
    use crate::color::Color;
    use crate::filters::NoiseFilter;
    use crate::grid::Grid;

    #[test]
    fn default_black_to_red() {
        let f = LinearGradientFilter::default();
        assert_eq!(f.color_for(0.0), Color::BLACK);
        assert_eq!(f.color_for(1.0), Color::RED);
        assert_eq!(f.color_for(0.5), Color::rgb(127, 0, 0));
    }

    #[test]
    fn blends_both_ends() {
        let f = LinearGradientFilter::new(Color::rgb(200, 100, 0), Color::rgb(0, 100, 200));
        assert_eq!(f.color_for(0.25), Color::rgb(150, 100, 50));
    }

    #[test]
    fn start_percentage_scales_value_only() {
        let f = LinearGradientFilter::new(Color::WHITE, Color::BLACK).with_start_percentage(0.5);
        // u = 0.5 - 0.2 = 0.3 of white, value scaled to 0.1 of black
        assert_eq!(f.color_for(0.2), Color::rgb(76, 76, 76));
        // Values above start_percentage go negative and saturate to zero
        assert_eq!(f.color_for(0.9), Color::BLACK);
    }

    #[test]
    fn output_is_opaque_and_same_size() {
        let field = Grid::from_fn(4, 4, |x, y| (x * 4 + y) as f32 / 16.0);
        let out = LinearGradientFilter::default().filter(&field);
        assert!(out.same_shape(&field));
        assert!(out.iter().all(|c| c.a == 255));
    }
}
