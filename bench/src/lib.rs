// Shared fixtures for the pipeline benchmarks
use perlin_field::{GeneratorConfig, Interpolation, PerlinNoiseGenerator};

pub const SIZE: usize = 256;
pub const SEED: u64 = 2025;

// The settings the islands renderer uses, with a chosen kernel
pub fn generator(interpolation: Interpolation) -> PerlinNoiseGenerator {
    PerlinNoiseGenerator::new(GeneratorConfig::new(7, 0.55, interpolation))
}
