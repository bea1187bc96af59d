use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{NoiseError, Result};
use crate::grid::Grid;
use crate::interpolation::Interpolation;

// Octave indices run 0..MAX_OCTAVES, so the widest sample period is 1 << 30
pub const MAX_OCTAVES: usize = 31;

// Settings read by one generation call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    pub octave_count: usize, // number of smoothed fields to blend
    pub persistence: f32,    // amplitude factor applied once per octave
    pub interpolation: Interpolation,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            octave_count: 4,
            persistence: 0.5,
            interpolation: Interpolation::Linear,
        }
    }
}

impl GeneratorConfig {
    pub fn new(octave_count: usize, persistence: f32, interpolation: Interpolation) -> Self {
        Self {
            octave_count,
            persistence,
            interpolation,
        }
    }

    // Sum of the weights the blend will divide by
    // Mirrors the running total in `perlin_noise_field`, step for step.
    pub fn total_amplitude(&self) -> f32 {
        let mut amplitude = 1.0f32;
        let mut total = 0.0f32;
        for _ in 0..self.octave_count {
            amplitude *= self.persistence;
            total += amplitude;
        }
        total
    }

    pub fn validate(&self) -> Result<()> {
        if self.octave_count == 0 || self.octave_count > MAX_OCTAVES {
            return Err(NoiseError::InvalidOctaveCount {
                count: self.octave_count,
                max: MAX_OCTAVES,
            });
        }
        let total_amplitude = self.total_amplitude();
        if !self.persistence.is_finite() || !total_amplitude.is_finite() || total_amplitude == 0.0
        {
            return Err(NoiseError::InvalidPersistence {
                persistence: self.persistence,
                octaves: self.octave_count,
                total_amplitude,
            });
        }
        Ok(())
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(NoiseError::InvalidDimensions { width, height });
    }
    Ok(())
}

// Value-noise generator: white noise, smoothed per octave, blended by persistence
// 1. generate_white_noise
// 2. smooth_noise_field for every octave
// 3. perlin_noise_field to blend and normalize
#[derive(Debug, Clone, Default)]
pub struct PerlinNoiseGenerator {
    config: GeneratorConfig,
}

impl PerlinNoiseGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    // One uniform sample in [0, 1) per cell, drawn x outer / y inner
    pub fn generate_white_noise<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Grid<f32>> {
        check_dimensions(width, height)?;
        let mut field = Grid::new(width, height);
        for x in 0..width {
            for y in 0..height {
                field.set(x, y, rng.random::<f32>());
            }
        }
        Ok(field)
    }

    // Resample `base` on a lattice of spacing 2^octave and bilinearly
    // interpolate between lattice points. The upper sample wraps around the
    // field edge, so the result tiles.
    // `octave` must be below MAX_OCTAVES.
    pub fn smooth_noise_field(&self, base: &Grid<f32>, octave: u32) -> Grid<f32> {
        assert!(
            (octave as usize) < MAX_OCTAVES,
            "octave {octave} is outside 0..{MAX_OCTAVES}"
        );
        let (width, height) = base.dimensions();
        let interp = self.config.interpolation;
        let sample_period = 1usize << octave;
        let sample_frequency = 1.0 / sample_period as f32;

        let mut smooth = Grid::new(width, height);
        for x in 0..width {
            let x0 = (x / sample_period) * sample_period;
            let x1 = (x0 + sample_period) % width;
            let horizontal_blend = (x - x0) as f32 * sample_frequency;

            for y in 0..height {
                let y0 = (y / sample_period) * sample_period;
                let y1 = (y0 + sample_period) % height;
                let vertical_blend = (y - y0) as f32 * sample_frequency;

                let top =
                    interp.interpolate(*base.get(x0, y0), *base.get(x1, y0), horizontal_blend);
                let bottom =
                    interp.interpolate(*base.get(x0, y1), *base.get(x1, y1), horizontal_blend);

                smooth.set(x, y, interp.interpolate(top, bottom, vertical_blend));
            }
        }
        smooth
    }

    // Blend every smoothed octave of `base` into one normalized field
    pub fn perlin_noise_field(&self, base: &Grid<f32>) -> Result<Grid<f32>> {
        self.config.validate()?;
        let octaves = self.config.octave_count;
        debug!(
            width = base.width(),
            height = base.height(),
            octaves,
            persistence = self.config.persistence,
            interpolation = %self.config.interpolation,
            "blending octaves"
        );

        // Octaves only read `base`, so they are smoothed in parallel
        let smooth_noise: Vec<Grid<f32>> = (0..octaves as u32)
            .into_par_iter()
            .map(|octave| self.smooth_noise_field(base, octave))
            .collect();

        let mut perlin_noise: Grid<f32> = Grid::new(base.width(), base.height());
        let mut amplitude = 1.0f32;
        let mut total_amplitude = 0.0f32;

        // Coarsest octave first
        for octave in (0..octaves).rev() {
            amplitude *= self.config.persistence;
            total_amplitude += amplitude;
            trace!(octave, amplitude, "accumulating octave");

            for (out, &v) in perlin_noise.iter_mut().zip(smooth_noise[octave].iter()) {
                *out += v * amplitude;
            }
        }

        debug_assert_eq!(total_amplitude, self.config.total_amplitude());
        for v in perlin_noise.iter_mut() {
            *v /= total_amplitude;
        }

        Ok(perlin_noise)
    }

    // White noise from `rng`, then the octave blend
    pub fn generate_perlin_noise<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Grid<f32>> {
        // Fail before drawing any samples
        self.config.validate()?;
        let white_noise = self.generate_white_noise(width, height, rng)?;
        self.perlin_noise_field(&white_noise)
    }

    pub fn generate_seeded(&self, width: usize, height: usize, seed: u64) -> Result<Grid<f32>> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_perlin_noise(width, height, &mut rng)
    }
}
