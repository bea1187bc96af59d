use std::fmt;

use tracing::debug;

use super::NoiseFilter;
use crate::color::Color;
use crate::grid::Grid;

// Half-open value range [start, end) painted with `color`
// `start < end` is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    pub start: f32,
    pub end: f32,
    pub color: Color,
}

impl ColorRange {
    pub fn new(start: f32, end: f32, color: Color) -> Self {
        Self { start, end, color }
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value < self.end && value >= self.start
    }

    // Color shaded by how far `value` sits towards `end`
    #[inline]
    pub fn shade(&self, value: f32) -> Color {
        self.color.scaled(value / self.end)
    }
}

impl fmt::Display for ColorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})[{}, {})",
            self.color.r, self.color.g, self.color.b, self.color.a, self.start, self.end
        )
    }
}

// Paints value bands with their own shaded color
// e.g. everything in [0.4, 0.5) becomes a yellow ramp.
// Ranges are checked in insertion order and the last match wins; values
// outside every range stay `Color::default()` (transparent).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomGradientFilter {
    ranges: Vec<ColorRange>,
}

impl CustomGradientFilter {
    pub fn new() -> Self {
        Self::default()
    }

    // Water, sand, grass, earth and snow bands for a [0, 1] field
    pub fn islands() -> Self {
        Self::new()
            .with_color_point(0.0, 0.40, Color::BLUE)
            .with_color_point(0.4, 0.50, Color::YELLOW)
            .with_color_point(0.50, 0.70, Color::GREEN)
            .with_color_point(0.70, 0.90, Color::SADDLE_BROWN)
            .with_color_point(0.90, 1.00, Color::WHITE)
    }

    pub fn add_color_point(&mut self, start: f32, end: f32, color: Color) {
        self.ranges.push(ColorRange::new(start, end, color));
    }

    pub fn with_color_point(mut self, start: f32, end: f32, color: Color) -> Self {
        self.add_color_point(start, end, color);
        self
    }

    pub fn ranges(&self) -> &[ColorRange] {
        &self.ranges
    }

    // Color for a single value
    pub fn color_for(&self, value: f32) -> Color {
        self.ranges
            .iter()
            .rev()
            .find(|range| range.contains(value))
            .map(|range| range.shade(value))
            .unwrap_or_default()
    }
}

impl FromIterator<ColorRange> for CustomGradientFilter {
    fn from_iter<I: IntoIterator<Item = ColorRange>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

impl NoiseFilter<f32, Color> for CustomGradientFilter {
    fn filter(&self, field: &Grid<f32>) -> Grid<Color> {
        debug!(
            width = field.width(),
            height = field.height(),
            ranges = self.ranges.len(),
            "applying custom gradient"
        );
        field.map(|&v| self.color_for(v))
    }
}
