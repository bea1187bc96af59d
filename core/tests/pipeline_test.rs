use perlin_field::{
    Color, CustomGradientFilter, GeneratorConfig, Grid, ImageTransformer, Interpolation,
    LinearGradientFilter, NoiseFilter, NoiseTransformer, NormalizeFilter, PerlinNoiseGenerator,
    PixelBufferTransformer,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SIZE: usize = 64;
const SEED: u64 = 2025;

fn islands_generator() -> PerlinNoiseGenerator {
    PerlinNoiseGenerator::new(GeneratorConfig::new(7, 0.55, Interpolation::Cosine))
}

#[test]
fn noise_to_islands_image() {
    let noise = islands_generator().generate_seeded(SIZE, SIZE, SEED).unwrap();
    assert_eq!(noise.dimensions(), (SIZE, SIZE));
    // Weighted average of [0, 1) samples stays in the unit band
    assert!(noise.iter().all(|&v| (-1e-5..=1.0 + 1e-5).contains(&v)));

    let colors = CustomGradientFilter::islands().filter(&noise);
    let img = ImageTransformer.transform_colors(&colors);
    assert_eq!(img.dimensions(), (SIZE as u32, SIZE as u32));

    let flat = colors.flatten();
    for (i, px) in img.pixels().enumerate() {
        assert_eq!(px.0, flat[i].to_array());
    }
}

#[test]
fn explicit_rng_matches_seeded_helper() {
    let generator = islands_generator();
    let mut rng = StdRng::seed_from_u64(SEED);
    let a = generator.generate_perlin_noise(SIZE, SIZE, &mut rng).unwrap();
    let b = generator.generate_seeded(SIZE, SIZE, SEED).unwrap();
    assert_eq!(a, b);
}

#[test]
fn steps_match_one_shot_generation() {
    let generator = islands_generator();
    let mut rng = StdRng::seed_from_u64(SEED);
    let white = generator.generate_white_noise(SIZE, SIZE, &mut rng).unwrap();
    let stepwise = generator.perlin_noise_field(&white).unwrap();
    let one_shot = generator.generate_seeded(SIZE, SIZE, SEED).unwrap();
    assert_eq!(stepwise, one_shot);
}

#[test]
fn octave_zero_reproduces_white_noise() {
    let generator = PerlinNoiseGenerator::default();
    let white = generator
        .generate_white_noise(4, 4, &mut StdRng::seed_from_u64(SEED))
        .unwrap();
    assert_eq!(generator.smooth_noise_field(&white, 0), white);
}

#[test]
fn smoothing_softens_white_noise() {
    let generator = islands_generator();
    let white = generator
        .generate_white_noise(SIZE, SIZE, &mut StdRng::seed_from_u64(SEED))
        .unwrap();
    let smooth = generator.perlin_noise_field(&white).unwrap();

    let roughness = |g: &Grid<f32>| {
        let mut sum = 0.0;
        for y in 0..SIZE {
            for x in 0..SIZE - 1 {
                sum += (g.get(x + 1, y) - g.get(x, y)).abs();
            }
        }
        sum
    };
    assert!(roughness(&smooth) < roughness(&white));
}

#[test]
fn normalized_grayscale_spans_black_to_white() {
    let noise = islands_generator().generate_seeded(SIZE, SIZE, SEED).unwrap();
    let stretched = NormalizeFilter::new().filter(&noise);
    let pixels = PixelBufferTransformer.transform_values(&stretched);
    assert_eq!(pixels.len(), SIZE * SIZE);
    assert!(pixels.contains(&Color::BLACK));
    assert!(pixels.contains(&Color::WHITE));
}

#[test]
fn chained_linear_gradient() {
    let noise = islands_generator().generate_seeded(SIZE, SIZE, SEED).unwrap();
    let chain = NormalizeFilter::new().then(LinearGradientFilter::new(Color::BLACK, Color::RED));
    let colors = chain.filter(&noise);
    assert!(colors.same_shape(&noise));
    assert!(colors.iter().all(|c| c.g == 0 && c.b == 0 && c.a == 255));
    assert!(colors.iter().any(|c| c.r == 255));
}
