use num_traits::AsPrimitive;

#[cfg(feature = "log")]
use log::debug;

use crate::config::{Config, ConfigError};
use crate::frame::ScanFrame;
use crate::kernel::KernelWeights;

/// Edge-renormalizing Gaussian smoother for range scans.
///
/// Each output sample is the weighted average of the input samples within
/// `radius` positions of it. Neighbours that fall outside the scan are skipped
/// and the remaining weights are renormalized, so samples near the ends of a
/// scan are not pulled toward zero.
///
/// Non-finite samples are not treated specially: a NaN or infinite range
/// propagates into every output within `radius` of it. Sanitize ranges before
/// smoothing if downstream consumers cannot handle that.
///
/// The smoother holds no per-frame state. All methods take `&self` and one
/// instance can serve several threads.
#[derive(Debug, Clone)]
pub struct ScanSmoother {
    config: Config,
    weights: KernelWeights,
}

impl ScanSmoother {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let weights = KernelWeights::from_config(&config);

        #[cfg(feature = "log")]
        debug!(
            "scan smoother: radius={} sigma={} taps={} center weight={}",
            config.radius,
            config.sigma,
            weights.tap_count(),
            weights.as_slice()[config.radius]
        );

        Ok(Self { config, weights })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn weights(&self) -> &KernelWeights {
        &self.weights
    }

    /// Smooth `input` into `output`.
    ///
    /// # Panics
    ///
    /// Panics if `output` and `input` differ in length.
    pub fn smooth_into<T>(&self, input: &[T], output: &mut [T])
    where
        T: Copy + AsPrimitive<f64>,
        f64: AsPrimitive<T>,
    {
        assert_eq!(
            input.len(),
            output.len(),
            "output buffer must have the same length as the input"
        );

        let radius = self.config.radius;
        let taps = self.weights.as_slice();
        let full_total = self.weights.total();

        for (i, out) in output.iter_mut().enumerate() {
            // Window clipped to the scan; tap index is (sample index - i + radius)
            let start = i.saturating_sub(radius);
            let end = (i + radius + 1).min(input.len());
            let window = &taps[start + radius - i..end + radius - i];
            let clipped = window.len() < taps.len();

            let mut sum = 0.0_f64;
            let mut clipped_total = 0.0_f64;
            let mut lowest = f64::INFINITY;
            let mut highest = f64::NEG_INFINITY;
            for (&sample, &weight) in input[start..end].iter().zip(window) {
                let sample: f64 = sample.as_();
                sum += sample * weight;
                if clipped {
                    clipped_total += weight;
                }
                lowest = lowest.min(sample);
                highest = highest.max(sample);
            }

            // Both totals include the center tap, which is always > 0
            let weight_total = if clipped { clipped_total } else { full_total };
            *out = bound(sum / weight_total, lowest, highest).as_();
        }
    }

    /// Smooth `input` into a newly allocated vector of the same length.
    #[cfg(feature = "alloc")]
    pub fn smooth<T>(&self, input: &[T]) -> alloc::vec::Vec<T>
    where
        T: Copy + AsPrimitive<f64>,
        f64: AsPrimitive<T>,
    {
        let mut output = input.to_vec();
        self.smooth_into(input, &mut output);
        output
    }

    /// Replace the ranges of `frame` with their smoothed values.
    ///
    /// Metadata and intensities are returned untouched.
    pub fn smooth_frame<T, const N: usize>(&self, mut frame: ScanFrame<T, N>) -> ScanFrame<T, N>
    where
        T: Copy + AsPrimitive<f64>,
        f64: AsPrimitive<T>,
    {
        let mut smoothed = frame.ranges.clone();
        self.smooth_into(&frame.ranges, &mut smoothed);
        frame.ranges = smoothed;
        frame
    }
}

/// Keep a weighted mean inside the range of the samples it was built from.
///
/// Rounding in the accumulation can land a hair outside that range, which an
/// integer sample type then truncates to the next value down. NaN passes through.
#[inline]
fn bound(mean: f64, lowest: f64, highest: f64) -> f64 {
    if mean < lowest {
        lowest
    } else if mean > highest {
        highest
    } else {
        mean
    }
}
