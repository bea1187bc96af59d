use super::NoiseFilter;
use crate::grid::Grid;

// Stretches a field so its smallest value maps to 0.0 and its largest to 1.0,
// then applies a gamma curve for contrast.
// A flat field maps to 0.0 everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeFilter {
    pub gamma: f32,
}

impl Default for NormalizeFilter {
    fn default() -> Self {
        Self { gamma: 1.0 }
    }
}

impl NormalizeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gamma(gamma: f32) -> Self {
        Self { gamma }
    }
}

impl NoiseFilter<f32, f32> for NormalizeFilter {
    fn filter(&self, field: &Grid<f32>) -> Grid<f32> {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for &v in field {
            min = min.min(v);
            max = max.max(v);
        }

        let range = max - min;
        field.map(|&v| {
            if range <= 0.0 {
                return 0.0;
            }
            let norm = (v - min) / range;
            if self.gamma == 1.0 {
                norm
            } else {
                norm.powf(self.gamma)
            }
        })
    }
}
