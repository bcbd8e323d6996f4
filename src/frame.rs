//! Scan frame: one revolution of range samples plus the metadata describing it.
//!
//! The smoother only ever touches `ranges`. Everything else travels through
//! unchanged.

use heapless::{String, Vec};

/// Capacity of the sensor frame identifier.
pub const FRAME_ID_CAPACITY: usize = 32;

/// Acquisition metadata of a scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScanMetadata {
    /// Acquisition time of the first sample, nanoseconds
    pub stamp_ns: u64,

    /// Identifier of the sensor coordinate frame
    pub frame_id: String<FRAME_ID_CAPACITY>,

    /// Angle of the first sample (rad)
    pub angle_min: f32,

    /// Angle of the last sample (rad)
    pub angle_max: f32,

    /// Angular distance between samples (rad)
    pub angle_increment: f32,

    /// Time between samples (s)
    pub time_increment: f32,

    /// Time between scans (s)
    pub scan_time: f32,

    pub range_min: Option<f32>,
    pub range_max: Option<f32>,
}

/// One sensor sweep holding at most `N` samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScanFrame<T, const N: usize> {
    pub metadata: ScanMetadata,

    /// Range samples ordered by bearing. Non-finite values mark missing returns.
    pub ranges: Vec<T, N>,

    /// Optional per-sample intensities; empty when the sensor reports none
    pub intensities: Vec<f32, N>,
}

impl<T, const N: usize> ScanFrame<T, N> {
    pub fn new(metadata: ScanMetadata, ranges: Vec<T, N>) -> Self {
        Self {
            metadata,
            ranges,
            intensities: Vec::new(),
        }
    }

    pub fn with_intensities(mut self, intensities: Vec<f32, N>) -> Self {
        self.intensities = intensities;
        self
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
