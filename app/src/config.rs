use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use perlin_field::{
    Color, ColorRange, CustomGradientFilter, GeneratorConfig, Interpolation,
    LinearGradientFilter,
};
use serde::{Deserialize, Deserializer};

// Render settings read from a JSON file
// Every field is optional; the defaults draw the classic 512×512 islands map.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    // Random seed when absent
    pub seed: Option<u64>,
    pub octave_count: usize,
    pub persistence: f32,
    #[serde(deserialize_with = "parse_interpolation")]
    pub interpolation: Interpolation,
    // Stretch the field to [0, 1] before coloring
    pub normalize: bool,
    pub filter: FilterConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            seed: None,
            octave_count: 7,
            persistence: 0.55,
            interpolation: Interpolation::Cosine,
            normalize: false,
            filter: FilterConfig::default(),
        }
    }
}

impl RenderConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(
            self.octave_count,
            self.persistence,
            self.interpolation,
        )
    }
}

// "linear" or "cosine", any case
fn parse_interpolation<'de, D>(deserializer: D) -> std::result::Result<Interpolation, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterConfig {
    // Islands bands when `ranges` is omitted
    CustomGradient {
        #[serde(default)]
        ranges: Option<Vec<RangeConfig>>,
    },
    LinearGradient {
        #[serde(default = "default_start_color")]
        start_color: ColorConfig,
        #[serde(default = "default_end_color")]
        end_color: ColorConfig,
        #[serde(default = "default_start_percentage")]
        start_percentage: f32,
    },
    Grayscale,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig::CustomGradient { ranges: None }
    }
}

fn default_start_color() -> ColorConfig {
    ColorConfig::Name("black".into())
}

fn default_end_color() -> ColorConfig {
    ColorConfig::Name("red".into())
}

fn default_start_percentage() -> f32 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeConfig {
    pub start: f32,
    pub end: f32,
    pub color: ColorConfig,
}

// CSS color name, [r, g, b] or [r, g, b, a]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorConfig {
    Name(String),
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl ColorConfig {
    pub fn resolve(&self) -> Result<Color> {
        match self {
            ColorConfig::Name(name) => palette::named::from_str(&name.to_ascii_lowercase())
                .map(Color::from)
                .ok_or_else(|| anyhow!("unknown color name `{name}`")),
            ColorConfig::Rgb(rgb) => Ok(Color::from(*rgb)),
            ColorConfig::Rgba(rgba) => Ok(Color::from(*rgba)),
        }
    }
}

pub fn custom_gradient(ranges: Option<&[RangeConfig]>) -> Result<CustomGradientFilter> {
    let Some(ranges) = ranges else {
        return Ok(CustomGradientFilter::islands());
    };
    ranges
        .iter()
        .map(|r| -> Result<ColorRange> {
            Ok(ColorRange::new(r.start, r.end, r.color.resolve()?))
        })
        .collect()
}

pub fn linear_gradient(
    start_color: &ColorConfig,
    end_color: &ColorConfig,
    start_percentage: f32,
) -> Result<LinearGradientFilter> {
    Ok(
        LinearGradientFilter::new(start_color.resolve()?, end_color.resolve()?)
            .with_start_percentage(start_percentage),
    )
}
