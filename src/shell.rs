//! Serial command shell serving the captured series.

use core::fmt::Write as _;

use embedded_hal::digital::v2::OutputPin;
use embedded_hal::serial::{Read, Write};

use crate::drivers::{SerialConsole, StatusLeds};
use crate::tilt::TiltSample;

/// Dump request byte sent by the host-side capture tool.
pub const CMD_DUMP: u8 = b'c';

/// Polls for one pending command byte and dispatches it. Unknown bytes are
/// ignored. Returns the number of samples dumped when a dump ran.
pub fn poll<S, SAMPLE, TRANSFER>(
    console: &mut SerialConsole<S>,
    samples: &[TiltSample],
    leds: &mut StatusLeds<SAMPLE, TRANSFER>,
) -> Option<usize>
where
    S: Read<u8> + Write<u8>,
    SAMPLE: OutputPin,
    TRANSFER: OutputPin,
{
    match console.read_byte()? {
        CMD_DUMP => Some(dump(console, samples, leds)),
        _ => None,
    }
}

/// Serves dump requests until `stop` fires.
pub fn serve<S, SAMPLE, TRANSFER>(
    console: &mut SerialConsole<S>,
    samples: &[TiltSample],
    leds: &mut StatusLeds<SAMPLE, TRANSFER>,
    mut stop: impl FnMut() -> bool,
) where
    S: Read<u8> + Write<u8>,
    SAMPLE: OutputPin,
    TRANSFER: OutputPin,
{
    while !stop() {
        poll(console, samples, leds);
    }
}

/// Streams every captured sample as one `pitch roll` pair per line, in
/// capture order. The transfer indicator is held on until the last line
/// is out.
fn dump<S, SAMPLE, TRANSFER>(
    console: &mut SerialConsole<S>,
    samples: &[TiltSample],
    leds: &mut StatusLeds<SAMPLE, TRANSFER>,
) -> usize
where
    S: Read<u8> + Write<u8>,
    SAMPLE: OutputPin,
    TRANSFER: OutputPin,
{
    leds.transfer_active(true);
    for sample in samples {
        write!(console, "{:.6} {:.6}\n", sample.pitch, sample.roll).ok();
    }
    leds.transfer_active(false);
    samples.len()
}
