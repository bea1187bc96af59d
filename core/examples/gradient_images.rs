// Generates and saves three 512×512 images from one noise field:
// Grayscale noise
// Black→red linear gradient
// Water / sand / grass / earth / snow bands

use perlin_field::{
    Color, CustomGradientFilter, GeneratorConfig, ImageTransformer, Interpolation,
    LinearGradientFilter, NoiseFilter, NoiseTransformer, PerlinNoiseGenerator,
};
use std::path::Path;

fn main() {
    let size = 512;
    let generator =
        PerlinNoiseGenerator::new(GeneratorConfig::new(7, 0.55, Interpolation::Cosine));
    let noise = generator.generate_seeded(size, size, 42).unwrap();

    // 1) Grayscale
    let img = ImageTransformer.transform_values(&noise);
    img.save(Path::new("noise_gray.png")).unwrap();
    println!("Saved noise_gray.png");

    // 2) Linear gradient
    let linear = LinearGradientFilter::new(Color::BLACK, Color::RED).filter(&noise);
    let img = ImageTransformer.transform_colors(&linear);
    img.save(Path::new("noise_linear.png")).unwrap();
    println!("Saved noise_linear.png");

    // 3) Islands
    let islands = CustomGradientFilter::islands().filter(&noise);
    let img = ImageTransformer.transform_colors(&islands);
    img.save(Path::new("noise_islands.png")).unwrap();
    println!("Saved noise_islands.png");
}
