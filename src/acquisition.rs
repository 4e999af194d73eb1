//! Timed sampling loop and capture state machine.
//!
//! The series is written only here, single-threaded, and becomes read-only
//! once [`Acquisition::run`] returns; readers borrow [`Acquisition::samples`]
//! afterwards, so the writer-then-readers handoff is enforced by the borrow
//! system.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use crate::bus::BusTransport;
use crate::config::{SampleConfig, STARTUP_SETTLE_MS};
use crate::drivers::{Adxl362, StatusLeds};
use crate::series::{CapacityError, TimeSeries};
use crate::tilt::{self, TiltSample};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Initializing,
    Sampling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError<E> {
    /// A bus exchange failed. Fatal during initialization; during sampling
    /// the loop aborts cleanly and the captured prefix stays valid.
    Transport(E),
    /// The configured sample count does not fit the series.
    Capacity(CapacityError),
}

impl<E> From<CapacityError> for CaptureError<E> {
    fn from(err: CapacityError) -> Self {
        CaptureError::Capacity(err)
    }
}

/// Owns the capture settings and the sample storage, and drives the
/// device through one Idle → Initializing → Sampling → Idle cycle per
/// [`run`](Self::run).
pub struct Acquisition<const N: usize> {
    config: SampleConfig,
    series: TimeSeries<N>,
    state: CaptureState,
}

impl<const N: usize> Acquisition<N> {
    /// Validates the derived sample count against the storage capacity up
    /// front, before any bus traffic happens.
    pub fn new(config: SampleConfig) -> Result<Self, CapacityError> {
        let series = TimeSeries::new();
        series.check_capacity(config.sample_count())?;
        Ok(Self {
            config,
            series,
            state: CaptureState::Idle,
        })
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    /// The captured samples, in acquisition order.
    pub fn samples(&self) -> &[TiltSample] {
        self.series.samples()
    }

    /// Runs one full capture: reset and configure the device, then pull
    /// `sample_count` samples at the configured period.
    ///
    /// `stop` is polled between iterations; stopping early is not an error
    /// and leaves the captured prefix readable. Each tick sleeps the full
    /// period after the work, so timing error accumulates over a capture
    /// (no drift compensation).
    ///
    /// Returns the number of samples actually captured.
    pub fn run<B, D, SAMPLE, TRANSFER>(
        &mut self,
        driver: &mut Adxl362<B>,
        delay: &mut D,
        leds: &mut StatusLeds<SAMPLE, TRANSFER>,
        stop: impl FnMut() -> bool,
    ) -> Result<usize, CaptureError<B::Error>>
    where
        B: BusTransport,
        D: DelayMs<u32>,
        SAMPLE: OutputPin,
        TRANSFER: OutputPin,
    {
        self.state = CaptureState::Initializing;
        if let Err(err) = Self::initialize(driver, delay) {
            self.state = CaptureState::Idle;
            return Err(CaptureError::Transport(err));
        }

        self.state = CaptureState::Sampling;
        self.series.clear();
        let result = self.sample_loop(driver, delay, leds, stop);
        leds.sample_idle();
        self.state = CaptureState::Idle;
        result.map(|()| self.series.len())
    }

    /// The device cannot be used uninitialized, so any failure here is
    /// fatal for the capture.
    fn initialize<B, D>(driver: &mut Adxl362<B>, delay: &mut D) -> Result<(), B::Error>
    where
        B: BusTransport,
        D: DelayMs<u32>,
    {
        driver.reset(delay)?;
        driver.configure()?;
        delay.delay_ms(STARTUP_SETTLE_MS);
        Ok(())
    }

    fn sample_loop<B, D, SAMPLE, TRANSFER>(
        &mut self,
        driver: &mut Adxl362<B>,
        delay: &mut D,
        leds: &mut StatusLeds<SAMPLE, TRANSFER>,
        mut stop: impl FnMut() -> bool,
    ) -> Result<(), CaptureError<B::Error>>
    where
        B: BusTransport,
        D: DelayMs<u32>,
        SAMPLE: OutputPin,
        TRANSFER: OutputPin,
    {
        let count = self.config.sample_count();
        for tick in 0..count {
            if stop() {
                break;
            }
            let raw = driver.read_axes().map_err(CaptureError::Transport)?;
            let sample = tilt::from_axes(raw.x, raw.y, raw.z);
            self.series.push(sample)?;
            leds.sample_tick(tick);
            delay.delay_ms(self.config.period_ms());
        }
        Ok(())
    }
}
