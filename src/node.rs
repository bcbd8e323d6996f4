//! Delivery adapter around [`ScanSmoother`].
//!
//! A node pulls frames from a [`ScanSource`], smooths them and hands them to a
//! [`ScanSink`]. Transports (middleware subscriptions, serial drivers, replay
//! files) implement the two traits; the smoothing itself never sees them.

use core::marker::PhantomData;

use num_traits::AsPrimitive;

#[cfg(feature = "log")]
use log::trace;

use crate::config::{Config, ConfigError};
use crate::frame::ScanFrame;
use crate::smoother::ScanSmoother;

/// Topic the stock node subscribes to for raw scans.
pub const DEFAULT_INPUT_TOPIC: &str = "/scan";

/// Topic the stock node publishes smoothed scans on.
pub const DEFAULT_OUTPUT_TOPIC: &str = "/gaus";

/// Producer of raw scans.
pub trait ScanSource<T, const N: usize> {
    /// Next pending frame, or `None` if nothing is available.
    fn next_scan(&mut self) -> Option<ScanFrame<T, N>>;
}

/// Consumer of smoothed scans.
pub trait ScanSink<T, const N: usize> {
    type Error;

    fn publish(&mut self, frame: ScanFrame<T, N>) -> Result<(), Self::Error>;
}

/// Source -> smoother -> sink pipeline.
pub struct FilterNode<T, const N: usize, Src, Snk> {
    smoother: ScanSmoother,
    source: Src,
    sink: Snk,
    processed: u64,
    _sample: PhantomData<T>,
}

impl<T, const N: usize, Src, Snk> FilterNode<T, N, Src, Snk>
where
    T: Copy + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
    Src: ScanSource<T, N>,
    Snk: ScanSink<T, N>,
{
    pub fn new(config: Config, source: Src, sink: Snk) -> Result<Self, ConfigError> {
        Ok(Self::with_smoother(ScanSmoother::new(config)?, source, sink))
    }

    pub fn with_smoother(smoother: ScanSmoother, source: Src, sink: Snk) -> Self {
        Self {
            smoother,
            source,
            sink,
            processed: 0,
            _sample: PhantomData,
        }
    }

    pub fn smoother(&self) -> &ScanSmoother {
        &self.smoother
    }

    /// Frames published since the node was created.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Process at most one frame.
    ///
    /// Returns `Ok(false)` if the source had no frame. A sink error drops the
    /// frame and is returned as-is.
    pub fn spin_once(&mut self) -> Result<bool, Snk::Error> {
        let Some(frame) = self.source.next_scan() else {
            return Ok(false);
        };

        let smoothed = self.smoother.smooth_frame(frame);

        #[cfg(feature = "log")]
        trace!(
            "publishing smoothed scan stamp={} samples={}",
            smoothed.metadata.stamp_ns,
            smoothed.ranges.len()
        );

        self.sink.publish(smoothed)?;
        self.processed += 1;
        Ok(true)
    }

    /// Process frames until the source runs dry.
    ///
    /// Returns the number of frames published by this call.
    pub fn spin(&mut self) -> Result<u64, Snk::Error> {
        let mut published = 0;
        while self.spin_once()? {
            published += 1;
        }
        Ok(published)
    }

    pub fn into_parts(self) -> (Src, Snk) {
        (self.source, self.sink)
    }
}

#[cfg(feature = "alloc")]
impl<T, const N: usize> ScanSource<T, N> for alloc::collections::VecDeque<ScanFrame<T, N>> {
    fn next_scan(&mut self) -> Option<ScanFrame<T, N>> {
        self.pop_front()
    }
}

#[cfg(feature = "alloc")]
impl<T, const N: usize> ScanSink<T, N> for alloc::vec::Vec<ScanFrame<T, N>> {
    type Error = core::convert::Infallible;

    fn publish(&mut self, frame: ScanFrame<T, N>) -> Result<(), Self::Error> {
        self.push(frame);
        Ok(())
    }
}
