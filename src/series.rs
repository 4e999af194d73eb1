//! In-memory capture storage.

use heapless::Vec;

use crate::tilt::TiltSample;

/// A requested capture does not fit the preallocated storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    pub requested: usize,
    pub capacity: usize,
}

/// Ordered, preallocated tilt sample storage.
///
/// Index `i` always holds the sample from the i-th acquisition tick; the
/// buffer is append-only while a capture runs and read-only afterwards.
#[derive(Debug, Default)]
pub struct TimeSeries<const N: usize> {
    samples: Vec<TiltSample, N>,
}

/// Storage sized for the largest capture the logger supports.
pub type DefaultTimeSeries = TimeSeries<{ crate::config::MAX_SAMPLES }>;

impl<const N: usize> TimeSeries<N> {
    pub fn new() -> Self {
        Self { samples: Vec::new() }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Checks that a capture of `requested` samples fits.
    pub fn check_capacity(&self, requested: usize) -> Result<(), CapacityError> {
        if requested > N {
            return Err(CapacityError {
                requested,
                capacity: N,
            });
        }
        Ok(())
    }

    pub fn push(&mut self, sample: TiltSample) -> Result<(), CapacityError> {
        self.samples.push(sample).map_err(|_| CapacityError {
            requested: N + 1,
            capacity: N,
        })
    }

    pub fn samples(&self) -> &[TiltSample] {
        &self.samples
    }

    /// Drops the previous capture; a restart overwrites.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
