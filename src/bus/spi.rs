//! Chip-select-gated SPI transport.

use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::OutputPin;

use super::{BusTransport, TransportError};

/// SPI mode configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiMode {
    Mode0, // CPOL=0, CPHA=0
    Mode1, // CPOL=0, CPHA=1
    Mode2, // CPOL=1, CPHA=0
    Mode3, // CPOL=1, CPHA=1
}

/// Transfer parameters for the accelerometer link.
///
/// The clock rate is advisory for the board HAL that owns the SPI
/// peripheral; `configure` only validates the framing this transport can
/// actually speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    pub bit_width: u8,
    pub mode: SpiMode,
    pub clock_hz: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        // 8 bits, mode 0; 5 MHz is the upper end of what the part accepts
        Self {
            bit_width: 8,
            mode: SpiMode::Mode0,
            clock_hz: 5_000_000,
        }
    }
}

/// Scoped assertion of the chip-select line. Deasserts on drop, so the line
/// is released on every exit path out of a transaction.
struct ChipSelect<'a, CS: OutputPin> {
    cs: &'a mut CS,
    released: bool,
}

impl<'a, CS: OutputPin> ChipSelect<'a, CS> {
    fn assert(cs: &'a mut CS) -> Result<Self, CS::Error> {
        cs.set_low()?;
        Ok(Self {
            cs,
            released: false,
        })
    }

    fn release(mut self) -> Result<(), CS::Error> {
        self.released = true;
        self.cs.set_high()
    }
}

impl<CS: OutputPin> Drop for ChipSelect<'_, CS> {
    fn drop(&mut self) {
        if !self.released {
            // Error path: a failed deassert must not mask the transfer error.
            self.cs.set_high().ok();
        }
    }
}

/// Synchronous serial transport with a dedicated chip-select gate.
/// `configure` must be called once before any transaction.
pub struct SpiBus<SPI, CS> {
    spi: SPI,
    cs: CS,
    configured: bool,
}

impl<SPI, CS, SpiE, PinE> SpiBus<SPI, CS>
where
    SPI: Transfer<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
{
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self {
            spi,
            cs,
            configured: false,
        }
    }

    /// Validates the transfer parameters and parks chip-select at its
    /// idle-high state.
    pub fn configure(&mut self, config: &BusConfig) -> Result<(), TransportError<SpiE, PinE>> {
        // Only 8-bit mode-0 framing; anything else needs a different wiring
        // of the underlying peripheral.
        if config.bit_width != 8 || config.mode != SpiMode::Mode0 {
            return Err(TransportError::UnsupportedConfig);
        }
        self.cs.set_high().map_err(TransportError::Cs)?;
        self.configured = true;
        Ok(())
    }

    /// Exchanges `words` under an asserted chip-select.
    pub fn transact(&mut self, words: &mut [u8]) -> Result<(), TransportError<SpiE, PinE>> {
        if !self.configured {
            return Err(TransportError::NotConfigured);
        }
        let gate = ChipSelect::assert(&mut self.cs).map_err(TransportError::Cs)?;
        self.spi.transfer(words).map_err(TransportError::Spi)?;
        gate.release().map_err(TransportError::Cs)?;
        Ok(())
    }

    /// Releases the underlying peripheral and pin.
    pub fn free(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS, SpiE, PinE> BusTransport for SpiBus<SPI, CS>
where
    SPI: Transfer<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
{
    type Error = TransportError<SpiE, PinE>;

    fn transact(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        SpiBus::transact(self, words)
    }
}
