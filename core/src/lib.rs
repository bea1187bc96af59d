// core holds the noise field, generator, filter and transform pipeline
pub mod color;
pub mod error;
pub mod filters;
pub mod generator;
pub mod grid;
pub mod interpolation;
pub mod transform;

pub use color::Color;
pub use error::{NoiseError, Result};
pub use filters::{
    ColorRange, CustomGradientFilter, FilterChain, LinearGradientFilter, NoiseFilter,
    NormalizeFilter,
};
pub use generator::{GeneratorConfig, MAX_OCTAVES, PerlinNoiseGenerator};
pub use grid::Grid;
pub use interpolation::Interpolation;
pub use transform::{
    ImageTransformer, NoiseTransformer, PixelBufferTransformer, RgbaBytesTransformer, grayscale,
};
