use image::{ImageBuffer, Rgba, RgbaImage};
use tracing::debug;

use crate::color::Color;
use crate::grid::Grid;

// Turns a finished field into something outside the Grid world
// (a pixel buffer, an image, a texture upload...).
// One method per cell type: color fields are copied channel by channel,
// scalar fields are rendered as grayscale first.
pub trait NoiseTransformer {
    type Output;

    fn transform_colors(&self, field: &Grid<Color>) -> Self::Output;

    fn transform_values(&self, field: &Grid<f32>) -> Self::Output {
        self.transform_colors(&grayscale(field))
    }
}

// Scalar field as opaque gray, R = G = B = value
pub fn grayscale(field: &Grid<f32>) -> Grid<Color> {
    field.map(|&v| Color::gray(v))
}

// Flat, row-major list of colors
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelBufferTransformer;

impl NoiseTransformer for PixelBufferTransformer {
    type Output = Vec<Color>;

    fn transform_colors(&self, field: &Grid<Color>) -> Vec<Color> {
        field.flatten()
    }
}

// RGBA bytes, four per cell, ready for a texture upload
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbaBytesTransformer;

impl NoiseTransformer for RgbaBytesTransformer {
    type Output = Vec<u8>;

    fn transform_colors(&self, field: &Grid<Color>) -> Vec<u8> {
        let colors = field.flatten();
        let mut buf = Vec::with_capacity(colors.len() * 4);
        for c in colors {
            buf.extend_from_slice(&c.to_array());
        }
        buf
    }
}

// `image` RGBA image with the field's dimensions
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageTransformer;

impl NoiseTransformer for ImageTransformer {
    type Output = RgbaImage;

    fn transform_colors(&self, field: &Grid<Color>) -> RgbaImage {
        let (width, height) = field.dimensions();
        debug!(width, height, "building rgba image");
        let colors = field.flatten();
        ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
            Rgba::from(colors[x as usize + y as usize * width])
        })
    }
}
