use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

// Linear interpolation between a and b
// `t` is not clamped, values outside [0, 1] extrapolate.
#[inline]
pub fn linear(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + t * b
}

// Cosine-eased interpolation
// mu = (1 - cos(t * PI)) / 2, evaluated in f64
#[inline]
pub fn cosine(a: f32, b: f32, t: f32) -> f32 {
    let mu = ((1.0 - (t as f64 * PI).cos()) / 2.0) as f32;
    a * (1.0 - mu) + b * mu
}

// Kernel used when smoothing an octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    #[default]
    Linear,
    Cosine,
}

impl Interpolation {
    #[inline]
    pub fn interpolate(self, a: f32, b: f32, t: f32) -> f32 {
        match self {
            Interpolation::Linear => linear(a, b, t),
            Interpolation::Cosine => cosine(a, b, t),
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpolation::Linear => f.write_str("linear"),
            Interpolation::Cosine => f.write_str("cosine"),
        }
    }
}

impl FromStr for Interpolation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Interpolation::Linear),
            "cosine" => Ok(Interpolation::Cosine),
            other => Err(format!(
                "unknown interpolation `{other}`, expected `linear` or `cosine`"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Interpolation, cosine, linear};

    const KERNELS: [Interpolation; 2] = [Interpolation::Linear, Interpolation::Cosine];

    #[test]
    fn endpoints_are_exact() {
        for k in KERNELS {
            for &(a, b) in &[(0.0, 1.0), (0.25, 0.75), (-3.5, 8.0), (0.9, 0.1)] {
                assert_eq!(k.interpolate(a, b, 0.0), a, "{k} at t=0");
                assert_eq!(k.interpolate(a, b, 1.0), b, "{k} at t=1");
            }
        }
    }

    #[test]
    fn cosine_midpoint_is_mean() {
        for &(a, b) in &[(0.0, 1.0), (0.2, 0.6), (-4.0, 2.0)] {
            let mid = cosine(a, b, 0.5);
            assert!((mid - (a + b) / 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn linear_extrapolates() {
        assert!((linear(0.0, 1.0, 2.0) - 2.0).abs() < 1e-6);
        assert!((linear(0.0, 1.0, -1.0) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_eases_near_endpoints() {
        // Flatter than linear close to t=0
        assert!(cosine(0.0, 1.0, 0.1) < linear(0.0, 1.0, 0.1));
        assert!(cosine(0.0, 1.0, 0.9) > linear(0.0, 1.0, 0.9));
    }

    #[test]
    fn parse_names() {
        assert_eq!("Cosine".parse::<Interpolation>(), Ok(Interpolation::Cosine));
        assert_eq!("linear".parse::<Interpolation>(), Ok(Interpolation::Linear));
        assert!("cubic".parse::<Interpolation>().is_err());
    }
}
