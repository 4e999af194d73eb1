//! End-to-end session wiring: configuration, capture, then serving.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use embedded_hal::serial::{Read, Write};

use crate::acquisition::{Acquisition, CaptureError};
use crate::bus::BusTransport;
use crate::config::{ConfigError, SampleConfig};
use crate::drivers::{Adxl362, SerialConsole, StatusLeds};
use crate::shell;

/// Resolves the capture settings from the setup resource.
///
/// A missing resource falls back to defaults (the storage collaborator is
/// expected to persist [`SampleConfig::render_default`] for the next run).
/// An unreadable resource is fatal: both indicators go on and the parse
/// error surfaces.
pub fn load_config<SAMPLE, TRANSFER>(
    text: Option<&str>,
    leds: &mut StatusLeds<SAMPLE, TRANSFER>,
) -> Result<SampleConfig, ConfigError>
where
    SAMPLE: OutputPin,
    TRANSFER: OutputPin,
{
    let Some(text) = text else {
        return Ok(SampleConfig::default());
    };
    match SampleConfig::parse(text) {
        Ok(config) => Ok(config),
        Err(err) => {
            leds.fault();
            Err(err)
        }
    }
}

/// Runs one full logger session: capture the configured series, then serve
/// dump requests until `stop_serve` fires. Returns the captured count.
pub fn run_session<const N: usize, B, S, D, SAMPLE, TRANSFER>(
    config: SampleConfig,
    driver: &mut Adxl362<B>,
    console: &mut SerialConsole<S>,
    delay: &mut D,
    leds: &mut StatusLeds<SAMPLE, TRANSFER>,
    stop_capture: impl FnMut() -> bool,
    stop_serve: impl FnMut() -> bool,
) -> Result<usize, CaptureError<B::Error>>
where
    B: BusTransport,
    S: Read<u8> + Write<u8>,
    D: DelayMs<u32>,
    SAMPLE: OutputPin,
    TRANSFER: OutputPin,
{
    let mut acquisition = Acquisition::<N>::new(config)?;

    console.write_line("ADXL362 tilt logger");
    let captured = acquisition.run(driver, delay, leds, stop_capture)?;
    console.write_line("Capture complete");

    shell::serve(console, acquisition.samples(), leds, stop_serve);
    Ok(captured)
}
