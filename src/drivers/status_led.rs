//! Two-indicator status signaling.

use embedded_hal::digital::v2::OutputPin;

/// The board's two status indicators.
///
/// `sample` alternates per acquisition tick, so it blinks at half the
/// sample rate while a capture runs. `transfer` is held on for the duration
/// of a data dump. Both on together signals a configuration-load fault.
///
/// Indicator writes are best-effort; signaling never fails the pipeline.
pub struct StatusLeds<SAMPLE, TRANSFER> {
    sample: SAMPLE,
    transfer: TRANSFER,
}

impl<SAMPLE, TRANSFER> StatusLeds<SAMPLE, TRANSFER>
where
    SAMPLE: OutputPin,
    TRANSFER: OutputPin,
{
    pub fn new(sample: SAMPLE, transfer: TRANSFER) -> Self {
        Self { sample, transfer }
    }

    /// Drives the sample indicator for one acquisition tick: on when the
    /// tick index is even, off when odd.
    pub fn sample_tick(&mut self, index: usize) {
        if index % 2 == 0 {
            self.sample.set_high().ok();
        } else {
            self.sample.set_low().ok();
        }
    }

    /// Sample indicator off; capture is no longer running.
    pub fn sample_idle(&mut self) {
        self.sample.set_low().ok();
    }

    pub fn transfer_active(&mut self, on: bool) {
        if on {
            self.transfer.set_high().ok();
        } else {
            self.transfer.set_low().ok();
        }
    }

    /// Both indicators on: configuration-load fault.
    pub fn fault(&mut self) {
        self.sample.set_high().ok();
        self.transfer.set_high().ok();
    }

    pub fn clear(&mut self) {
        self.sample.set_low().ok();
        self.transfer.set_low().ok();
    }

    pub fn free(self) -> (SAMPLE, TRANSFER) {
        (self.sample, self.transfer)
    }
}
