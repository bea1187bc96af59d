use thiserror::Error;

// Configuration errors, reported once at the generation entry points
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoiseError {
    #[error("field dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("octave count must be between 1 and {max}, got {count}")]
    InvalidOctaveCount { count: usize, max: usize },

    #[error("persistence {persistence} gives a total amplitude of {total_amplitude} over {octaves} octaves")]
    InvalidPersistence {
        persistence: f32,
        octaves: usize,
        total_amplitude: f32,
    },
}

pub type Result<T> = std::result::Result<T, NoiseError>;
