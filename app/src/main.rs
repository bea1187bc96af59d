// Headless renderer: noise field -> filter -> PNG
//
// usage: app [CONFIG.json] [OUTPUT.png]

mod config;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use image::RgbaImage;
use perlin_field::{
    ImageTransformer, NoiseFilter, NoiseTransformer, NormalizeFilter, PerlinNoiseGenerator,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{FilterConfig, RenderConfig, custom_gradient, linear_gradient};

const DEFAULT_OUTPUT: &str = "noise.png";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn render(config: &RenderConfig, seed: u64) -> Result<RgbaImage> {
    let generator = PerlinNoiseGenerator::new(config.generator_config());

    let start = Instant::now();
    let mut noise = generator
        .generate_seeded(config.width, config.height, seed)
        .context("noise generation failed")?;
    info!(
        width = config.width,
        height = config.height,
        seed,
        elapsed_ms = start.elapsed().as_secs_f32() * 1000.0,
        "generated noise field"
    );

    if config.normalize {
        noise = NormalizeFilter::new().filter(&noise);
    }

    let img = match &config.filter {
        FilterConfig::CustomGradient { ranges } => {
            let filter = custom_gradient(ranges.as_deref())?;
            ImageTransformer.transform_colors(&filter.filter(&noise))
        }
        FilterConfig::LinearGradient {
            start_color,
            end_color,
            start_percentage,
        } => {
            let filter = linear_gradient(start_color, end_color, *start_percentage)?;
            ImageTransformer.transform_colors(&filter.filter(&noise))
        }
        FilterConfig::Grayscale => ImageTransformer.transform_values(&noise),
    };
    Ok(img)
}

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => RenderConfig::load(Path::new(&path))?,
        None => RenderConfig::default(),
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let seed = config.seed.unwrap_or_else(rand::random);
    let start = Instant::now();
    let img = render(&config, seed)?;
    img.save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        path = %output.display(),
        elapsed_ms = start.elapsed().as_secs_f32() * 1000.0,
        "saved image"
    );
    Ok(())
}
