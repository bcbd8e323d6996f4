//! Kernel weight computation.
//!
//! Weights follow a Gaussian-shaped falloff:
//! weight(x) = exp(-0.8 * x^2 / sigma^2) / (sigma * sqrt(2pi))
//!
//! The 0.8 exponent coefficient is steeper than the textbook normal density
//! (0.5) and is kept as-is so filtered scans match the stock node.

use heapless::Vec;

use crate::config::{Config, ConfigError};

/// Exponent coefficient of the falloff.
pub const SHAPING: f64 = 0.8;

const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

const MAX_TAPS: usize = 2 * Config::MAX_RADIUS + 1;

/// Weight of a sample `offset` positions away from the center.
///
/// Symmetric in `offset`, maximal at 0 and never negative. Far offsets with a
/// small `sigma` underflow to exactly 0.0.
#[inline]
pub fn gaussian_weight(offset: i32, sigma: f32) -> f64 {
    let sigma = f64::from(sigma);
    let x = f64::from(offset);
    libm::exp(-SHAPING * x * x / (sigma * sigma)) / (sigma * SQRT_2PI)
}

/// Precomputed weights for offsets -radius..=radius.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelWeights {
    taps: Vec<f64, MAX_TAPS>,
    radius: usize,
}

impl KernelWeights {
    /// Build the table for a validated configuration.
    pub(crate) fn from_config(config: &Config) -> Self {
        debug_assert!(config.validate().is_ok());

        let radius = config.radius.min(Config::MAX_RADIUS);
        let reach = radius as i32;

        let mut taps = Vec::new();
        for offset in -reach..=reach {
            // Capacity is sized for MAX_RADIUS
            let _ = taps.push(gaussian_weight(offset, config.sigma));
        }

        Self { taps, radius }
    }

    /// Build the table for `radius` and `sigma`, validating both first.
    pub fn new(radius: usize, sigma: f32) -> Result<Self, ConfigError> {
        let config = Config::new(radius, sigma);
        config.validate()?;
        Ok(Self::from_config(&config))
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Number of taps, always 2 * radius + 1.
    pub fn tap_count(&self) -> usize {
        self.taps.len()
    }

    /// Weights ordered by offset; index `k` holds the weight for offset `k - radius`.
    pub fn as_slice(&self) -> &[f64] {
        &self.taps
    }

    /// Weight for `offset`, or `None` if it lies outside the window.
    pub fn weight(&self, offset: isize) -> Option<f64> {
        let index = offset.checked_add(self.radius as isize)?;
        usize::try_from(index).ok().and_then(|i| self.taps.get(i).copied())
    }

    /// Sum of the full window. Samples whose window is not clipped by the scan
    /// edges are normalized by this value.
    pub fn total(&self) -> f64 {
        self.taps.iter().sum()
    }
}
