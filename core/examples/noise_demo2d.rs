use perlin_field::{GeneratorConfig, Interpolation, PerlinNoiseGenerator};

fn main() {
    // 7 octaves of cosine-smoothed noise on a 128×128 field, seed 2025
    let generator =
        PerlinNoiseGenerator::new(GeneratorConfig::new(7, 0.55, Interpolation::Cosine));
    let noise = generator.generate_seeded(128, 128, 2025).unwrap();

    // Print the top-left 16×16 corner of the field
    for y in 0..16 {
        for x in 0..16 {
            print!("{:>6.3} ", noise.get(x, y));
        }
        println!();
    }
}
